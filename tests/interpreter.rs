use std::collections::{BTreeMap, BTreeSet};

use epistemic_kbp::{
    actions::{
        library::{FnAction, Utterance},
        ArgumentError, Arity, Value,
    },
    agent::Agent,
    config::Config,
    interpreter::Interpreter,
    kripke::{
        builder::{all_valuations, from_observability, StructureBuilder},
        KripkeStructure, WorldKey,
    },
    program::AgentProgram,
    reports::Report,
    structures::{agent_id::AgentId, atom::Atom, formula::Formula, world::KripkeWorld},
    types::err::{ActionError, ErrorKind, ModelError},
};

fn waiting(id: &str) -> Agent {
    let mut program = AgentProgram::default();
    program.set_default(Utterance::shared("wait", ""));
    Agent::new(id, program)
}

mod protocol {

    use super::*;

    fn shared_fact() -> (KripkeStructure, WorldKey, WorldKey) {
        let mut builder = StructureBuilder::default();
        let w1 = builder.world(KripkeWorld::named("w1", [("p", true)]));
        let w2 = builder.world(KripkeWorld::named("w2", [("p", false)]));
        for agent in ["a", "b"] {
            assert!(builder.indistinguishable(&AgentId::from(agent), &[w1, w2]).is_ok());
        }
        (builder.build(), w1, w2)
    }

    fn knows_p(id: &str) -> Agent {
        let mut program = AgentProgram::default();
        program.push(
            Formula::knows(id, Formula::atom("p")),
            Utterance::shared("actionP", "p"),
        );
        Agent::new(id, program)
    }

    #[test]
    fn two_agents_one_fact() {
        let (base, w1, w2) = shared_fact();
        let Ok(mut interpreter) =
            Interpreter::from_config(Config::default(), &base, vec![knows_p("a"), knows_p("b")])
        else {
            panic!("interpreter");
        };
        assert_eq!(interpreter.is_finished_at(w1), Ok(false));

        let Ok(report) = interpreter.public_announcement(&Formula::atom("p"), w1) else {
            panic!("p is true at w1");
        };

        for (agent, structure) in interpreter.structures() {
            assert_eq!(structure.world_keys().collect::<Vec<_>>(), vec![w1]);
            let outcome = &report.outcomes[agent];
            assert_eq!(outcome.action.as_deref(), Some("actionP"));
            assert_eq!(outcome.result, Some(Ok(Value::from("p"))));
        }

        assert_eq!(interpreter.is_finished_at(w1), Ok(true));
        assert_eq!(
            interpreter.is_finished_at(w2),
            Err(ModelError::InvalidModel {
                agent: AgentId::from("a"),
                world: w2
            })
        );
        assert_eq!(interpreter.report(), Report::Converged);
        assert_eq!(interpreter.counters.rounds, 1);
    }

    #[test]
    fn false_announcement() {
        let (base, w1, _) = shared_fact();
        let Ok(mut interpreter) =
            Interpreter::from_config(Config::default(), &base, vec![knows_p("a"), knows_p("b")])
        else {
            panic!("interpreter");
        };

        assert!(matches!(
            interpreter.public_announcement(&Formula::not(Formula::atom("p")), w1),
            Err(ErrorKind::Model(ModelError::InvalidModel { .. }))
        ));
    }

    #[test]
    fn observations() {
        let (base, w1, _) = shared_fact();
        let Ok(mut interpreter) =
            Interpreter::from_config(Config::default(), &base, vec![knows_p("a"), knows_p("b")])
        else {
            panic!("interpreter");
        };
        assert!(interpreter.associate(&AgentId::from("a"), [Atom::from("p")]).is_ok());
        assert_eq!(
            interpreter.associations()[&AgentId::from("a")],
            BTreeSet::from([Atom::from("p")])
        );
        assert!(interpreter.associations()[&AgentId::from("b")].is_empty());

        let Ok(report) = interpreter.public_announcement(&Formula::top(), w1) else {
            panic!("top is true everywhere");
        };

        let a = &report.outcomes[&AgentId::from("a")];
        assert_eq!(
            a.observation,
            Formula::not(Formula::knows("a", Formula::atom("p")))
        );
        assert_eq!(a.action, None);
        assert_eq!(a.result, None);

        let b = &report.outcomes[&AgentId::from("b")];
        assert_eq!(b.observation, Formula::not(Formula::knows("b", Formula::top())));
    }
}

mod permissions {

    use super::*;

    /// Agent a observes p, and agent b observes q.
    fn setup() -> (KripkeStructure, WorldKey) {
        let atoms = ["p", "q"].map(Atom::from);
        let observations = BTreeMap::from([
            (AgentId::from("a"), BTreeSet::from([atoms[0].clone()])),
            (AgentId::from("b"), BTreeSet::from([atoms[1].clone()])),
        ]);
        let (base, keys) = from_observability(all_valuations(&atoms), &observations);
        (base, keys[3])
    }

    fn reporter() -> Agent {
        let mut program = AgentProgram::default();
        program.push(
            Formula::knows("b", Formula::atom("q")),
            Utterance::shared("q", "q"),
        );
        program.set_default(Utterance::shared("unsure", ""));
        Agent::new("b", program)
    }

    #[test]
    fn hearing_narrows() {
        let (base, actual) = setup();
        let (a, b) = (AgentId::from("a"), AgentId::from("b"));

        let Ok(mut deaf) =
            Interpreter::from_config(Config::default(), &base, vec![waiting("a"), reporter()])
        else {
            panic!("interpreter");
        };
        assert!(deaf.public_announcement(&Formula::top(), actual).is_ok());

        let Some(unheard) = deaf.structure(&a) else {
            panic!("a has a structure");
        };
        assert!(unheard.same_model(&base));

        let Ok(mut hearing) =
            Interpreter::from_config(Config::default(), &base, vec![waiting("a"), reporter()])
        else {
            panic!("interpreter");
        };
        assert!(hearing.set_permissions(&a, [b.clone()]).is_ok());
        let Ok(report) = hearing.public_announcement(&Formula::top(), actual) else {
            panic!("top is true everywhere");
        };
        assert_eq!(
            report.outcomes[&b].explanation,
            Some(Formula::knows("b", Formula::atom("q")))
        );

        let Some(heard) = hearing.structure(&a) else {
            panic!("a has a structure");
        };
        assert_eq!(heard.world_count(), 2);
        assert!(heard
            .world_keys()
            .all(|world| unheard.contains_world(world)));
        assert_eq!(hearing.permissions()[&a], BTreeSet::from([b]));
    }

    #[test]
    fn own_explanation() {
        let a = AgentId::from("a");
        let mut builder = StructureBuilder::default();
        let w1 = builder.world(KripkeWorld::named("w1", [("p", true), ("q", true)]));
        let w2 = builder.world(KripkeWorld::named("w2", [("p", false), ("q", true)]));
        let w3 = builder.world(KripkeWorld::named("w3", [("p", true), ("q", false)]));
        assert!(builder.indistinguishable(&a, &[w1, w2]).is_ok());
        assert!(builder.arc(&a, w3, w3).is_ok());
        let base = builder.build();

        let knows_q = || {
            let mut program = AgentProgram::default();
            program.push(
                Formula::knows("a", Formula::atom("q")),
                Utterance::shared("q", "q"),
            );
            Agent::new("a", program)
        };

        let Ok(mut quiet) = Interpreter::from_config(Config::default(), &base, vec![knows_q()])
        else {
            panic!("interpreter");
        };
        assert!(quiet.set_permissions(&a, [a.clone()]).is_ok());
        let Ok(report) = quiet.public_announcement(&Formula::top(), w1) else {
            panic!("top is true everywhere");
        };
        assert_eq!(
            report.outcomes[&a].explanation,
            Some(Formula::knows("a", Formula::atom("q")))
        );
        assert_eq!(report.worlds[&a], 3);
        assert_eq!(quiet.counters.announcements, 1);

        let mut config = Config::default();
        assert!(config.self_hearing.set(true));
        let Ok(mut echoing) = Interpreter::from_config(config, &base, vec![knows_q()]) else {
            panic!("interpreter");
        };
        assert!(echoing.set_permissions(&a, [a.clone()]).is_ok());
        let Ok(report) = echoing.public_announcement(&Formula::top(), w1) else {
            panic!("top is true everywhere");
        };
        assert_eq!(report.worlds[&a], 2);
        assert!(!echoing.structures()[&a].contains_world(w3));
    }

    #[test]
    fn agents_without_actions_are_silent() {
        let (base, actual) = setup();
        let (a, b) = (AgentId::from("a"), AgentId::from("b"));

        let Ok(mut interpreter) = Interpreter::from_config(
            Config::default(),
            &base,
            vec![waiting("a"), Agent::new("b", AgentProgram::default())],
        ) else {
            panic!("interpreter");
        };
        assert!(interpreter.permit(&a, &b).is_ok());

        let Ok(report) = interpreter.public_announcement(&Formula::top(), actual) else {
            panic!("top is true everywhere");
        };
        assert_eq!(report.outcomes[&b].explanation, None);
        assert_eq!(report.worlds[&a], 4);
        assert_eq!(interpreter.counters.announcements, 2);
    }
}

mod actions {

    use super::*;

    fn echo() -> Agent {
        let mut program = AgentProgram::default();
        program.set_default(FnAction::shared(
            "echo",
            Arity::Exact(1),
            Box::new(|arguments: &[Value]| -> Result<Value, ArgumentError> {
                Ok(arguments[0].clone())
            }),
        ));
        Agent::new("a", program)
    }

    #[test]
    fn arity_checked_before_invocation() {
        let mut builder = StructureBuilder::default();
        let w = builder.world(KripkeWorld::named("w", [("p", true)]));
        let v = builder.world(KripkeWorld::named("v", [("p", false)]));
        assert!(builder.indistinguishable(&AgentId::from("a"), &[w, v]).is_ok());
        let base = builder.build();

        let Ok(mut interpreter) = Interpreter::from_config(Config::default(), &base, vec![echo()])
        else {
            panic!("interpreter");
        };

        let Ok(report) = interpreter.public_announcement(&Formula::atom("p"), w) else {
            panic!("p is true at w");
        };
        assert_eq!(
            report.results()[&AgentId::from("a")],
            Some(&Err(ActionError::ArityMismatch {
                action: "echo".to_owned(),
                expected: Arity::Exact(1),
                found: 0
            }))
        );
        assert_eq!(interpreter.is_finished_at(w), Ok(true));

        interpreter.bind_arguments("echo", vec![Value::Int(7)]);
        let Ok(report) = interpreter.public_announcement(&Formula::top(), w) else {
            panic!("top is true everywhere");
        };
        assert_eq!(report.results()[&AgentId::from("a")], Some(&Ok(Value::Int(7))));
        assert_eq!(report.round, 2);
    }
}
