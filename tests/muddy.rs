use std::collections::BTreeSet;

use epistemic_kbp::{
    config::{Config, Redistribution},
    reports::{Report, RoundReport},
    scenarios::muddy::{child, muddy_children, Hearing, CLEAN, MUDDY, UNKNOWN},
    types::err::{ErrorKind, ModelError},
};

/// The answer of child `index` in `report`.
fn answer(report: &RoundReport, index: usize) -> Option<&str> {
    report.outcomes[&child(index)].action.as_deref()
}

/// Every nonempty subset of 1..=count.
fn muddy_sets(count: usize) -> Vec<BTreeSet<usize>> {
    (1..(1_usize << count))
        .map(|bits| (1..=count).filter(|index| bits & (1 << (index - 1)) != 0).collect())
        .collect()
}

mod everyone_hears {

    use super::*;

    #[test]
    fn muddy_children_know_in_round_k() {
        for count in 1..=4 {
            for muddy in muddy_sets(count) {
                let Ok(mut scenario) = muddy_children(count, &muddy, Hearing::All, Config::default())
                else {
                    panic!("scenario");
                };

                let Ok(mut reports) = scenario.run() else {
                    panic!("run of {count} with {muddy:?}");
                };
                assert_eq!(scenario.is_finished(), Ok(true));
                let Ok(closing) = scenario.round() else {
                    panic!("closing round of {count} with {muddy:?}");
                };
                reports.push(closing);

                let k = muddy.len();
                for report in &reports[..k - 1] {
                    for index in 1..=count {
                        assert_eq!(answer(report, index), Some(UNKNOWN));
                    }
                }

                for index in &muddy {
                    assert_eq!(answer(&reports[k - 1], *index), Some(MUDDY));
                }

                let Some(last) = reports.last() else {
                    panic!("some round was run");
                };
                for index in 1..=count {
                    let expected = if muddy.contains(&index) { MUDDY } else { CLEAN };
                    assert_eq!(answer(last, index), Some(expected));
                }
            }
        }
    }

    #[test]
    fn rounds_to_converge() {
        for (count, muddy, rounds) in [
            (3, BTreeSet::from([2]), 1),
            (3, BTreeSet::from([1, 3]), 2),
            (3, BTreeSet::from([1, 2, 3]), 2),
            (4, BTreeSet::from([1, 2, 4]), 3),
            (2, BTreeSet::from([1, 2]), 1),
        ] {
            let Ok(mut scenario) = muddy_children(count, &muddy, Hearing::All, Config::default())
            else {
                panic!("scenario");
            };
            assert_eq!(scenario.run().map(|reports| reports.len()), Ok(rounds));
            assert_eq!(scenario.interpreter.report(), Report::Converged);
        }
    }
}

mod other_hearing {

    use super::*;

    #[test]
    fn nobody_hears() {
        let mut config = Config::default();
        assert!(config.round_limit.set(5));

        let Ok(mut scenario) = muddy_children(3, &BTreeSet::from([1, 2]), Hearing::None, config)
        else {
            panic!("scenario");
        };

        let Ok(reports) = scenario.run() else {
            panic!("run");
        };
        assert_eq!(reports.len(), 5);
        assert_eq!(scenario.is_finished(), Ok(false));
        assert_eq!(scenario.interpreter.report(), Report::Running);

        for report in &reports {
            for index in 1..=3 {
                assert_eq!(answer(report, index), Some(UNKNOWN));
            }
            assert!(report.worlds.values().all(|worlds| *worlds == 7));
        }
    }

    #[test]
    fn single_muddy_child_needs_no_hearing() {
        let Ok(mut scenario) =
            muddy_children(3, &BTreeSet::from([2]), Hearing::None, Config::default())
        else {
            panic!("scenario");
        };

        let Ok(report) = scenario.round() else {
            panic!("round");
        };
        assert_eq!(answer(&report, 1), Some(UNKNOWN));
        assert_eq!(answer(&report, 2), Some(MUDDY));
        assert_eq!(answer(&report, 3), Some(UNKNOWN));
    }

    #[test]
    fn successive_redistribution_is_order_sensitive() {
        let mut config = Config::default();
        assert!(config.redistribution.set(Redistribution::Successive));

        let Ok(mut scenario) = muddy_children(3, &BTreeSet::from([1, 3]), Hearing::All, config)
        else {
            panic!("scenario");
        };

        assert!(matches!(
            scenario.round(),
            Err(ErrorKind::Model(ModelError::InvalidModel { .. }))
        ));
        assert_eq!(scenario.interpreter.counters.rounds, 0);
    }

    #[test]
    fn children_who_do_not_hear_themselves_drift_apart() {
        let Ok(mut scenario) =
            muddy_children(2, &BTreeSet::from([1, 2]), Hearing::All, Config::default())
        else {
            panic!("scenario");
        };
        scenario.interpreter.config.self_hearing.value = false;

        let Ok(first) = scenario.round() else {
            panic!("round 1");
        };
        assert_eq!(answer(&first, 1), Some(UNKNOWN));
        assert_eq!(answer(&first, 2), Some(UNKNOWN));
        assert!(first.worlds.values().all(|worlds| *worlds == 2));

        for index in [1, 2] {
            let Some(structure) = scenario.interpreter.structure(&child(index)) else {
                panic!("structure");
            };
            assert_eq!(structure.worlds_accessible_from(scenario.actual, &child(index)).len(), 1);
        }

        assert!(matches!(
            scenario.round(),
            Err(ErrorKind::Model(ModelError::InvalidModel { .. }))
        ));
    }
}
