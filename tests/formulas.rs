use std::collections::BTreeSet;

use epistemic_kbp::{
    kripke::builder::StructureBuilder,
    structures::{agent_id::AgentId, context::Context, formula::Formula, world::KripkeWorld},
};

fn pqrs() -> [Formula; 4] {
    ["p", "q", "r", "s"].map(Formula::atom)
}

mod simplification {

    use super::*;

    #[test]
    fn double_negation() {
        let [p, q, r, _] = pqrs();
        let formulas = [
            p.clone(),
            Formula::and([p.clone(), Formula::not(q.clone())]),
            Formula::implies(p.clone(), Formula::or([q.clone(), r.clone()])),
            Formula::knows("a", Formula::not(Formula::not(r.clone()))),
            Formula::possible("a", Formula::iff(p, q)),
        ];

        for f in formulas {
            assert_eq!(Formula::not(Formula::not(f.clone())).simplify(), f.simplify());
        }
    }

    #[test]
    fn de_morgan() {
        let [p, q, r, _] = pqrs();
        let pairs = [
            (p.clone(), q.clone()),
            (Formula::not(p.clone()), Formula::or([q.clone(), r.clone()])),
            (Formula::knows("a", p.clone()), Formula::implies(q, r)),
        ];

        for (a, b) in pairs {
            assert_eq!(
                Formula::and([a.clone(), b.clone()]).negation(),
                Formula::or([a.negation(), b.negation()]).simplify()
            );
            assert_eq!(
                Formula::or([a.clone(), b.clone()]).negation(),
                Formula::and([a.negation(), b.negation()]).simplify()
            );
        }
    }

    #[test]
    fn set_semantics() {
        let [p, q, _, _] = pqrs();

        let Formula::And(operands) = Formula::and([p.clone(), p.clone()]).simplify() else {
            panic!("conjunction expected");
        };
        assert_eq!(operands.len(), 1);

        assert_eq!(
            Formula::and([p.clone(), q.clone()]),
            Formula::and([q.clone(), p.clone()])
        );
        assert_eq!(Formula::or([p.clone(), q.clone()]), Formula::or([q, p]));
    }

    #[test]
    fn fixed_point_within_three_passes() {
        let [p, q, r, s] = pqrs();
        let formulas = [
            Formula::and([p.clone(), Formula::not(Formula::or([q.clone(), r.clone()]))]),
            Formula::or([p.clone(), Formula::not(Formula::and([q.clone(), r.clone()]))]),
            Formula::not(Formula::and([
                p.clone(),
                Formula::or([q.clone(), Formula::not(r.clone())]),
            ])),
            Formula::not(Formula::or([
                Formula::not(p.clone()),
                Formula::and([q.clone(), r.clone()]),
            ])),
            Formula::not(Formula::implies(p.clone(), Formula::and([q.clone(), r.clone()]))),
            Formula::not(Formula::iff(Formula::and([p.clone(), q.clone()]), r.clone())),
            Formula::not(Formula::not(Formula::and([p.clone(), q.clone()]))),
            Formula::and([
                Formula::and([p.clone(), q.clone()]),
                Formula::not(Formula::not(r.clone())),
            ]),
            Formula::or([
                Formula::possible("a", Formula::not(p.clone())),
                Formula::not(Formula::possible("a", q.clone())),
            ]),
            Formula::implies(
                Formula::not(Formula::not(p.clone())),
                Formula::or([q.clone(), Formula::or([r.clone(), s.clone()])]),
            ),
            Formula::or([
                Formula::not(Formula::and([p.clone(), q.clone()])),
                Formula::not(Formula::and([r.clone(), s.clone()])),
            ]),
        ];

        for f in formulas {
            let mut g = f.clone();
            for _ in 0..3 {
                g = g.simplify();
            }
            assert_eq!(g.simplify(), g, "no fixed point for {f}");
            assert_eq!(f.normalise(16), g);
        }
    }

    #[test]
    fn one_pass_is_not_enough() {
        let [p, q, r, _] = pqrs();
        let f = Formula::or([p.clone(), Formula::not(Formula::and([q.clone(), r.clone()]))]);

        let once = f.simplify();
        assert_ne!(once, once.simplify());
        assert_eq!(
            f.normalise(16),
            Formula::or([p, Formula::not(q), Formula::not(r)])
        );
    }

    #[test]
    fn modal_negation() {
        let [p, _, _, _] = pqrs();
        assert_eq!(
            Formula::possible("a", p.clone()).negation(),
            Formula::knows("a", Formula::not(p.clone()))
        );
        assert_eq!(
            Formula::knows("a", p.clone()).negation(),
            Formula::not(Formula::knows("a", p))
        );
    }
}

mod evaluation {

    use epistemic_kbp::types::err::EvaluationError;

    use super::*;

    #[test]
    fn box_diamond_duality() {
        let ag = AgentId::from("ag");
        let mut builder = StructureBuilder::default();
        let w = builder.world(KripkeWorld::named("w", [("p", false), ("q", false)]));
        let w1 = builder.world(KripkeWorld::named("w1", [("p", true), ("q", true)]));
        let w2 = builder.world(KripkeWorld::named("w2", [("p", false), ("q", true)]));
        assert!(builder.arc(&ag, w, w1).is_ok());
        assert!(builder.arc(&ag, w, w2).is_ok());
        builder.certify_reflexive();
        builder.certify_symmetric();
        let structure = builder.build();

        assert_eq!(
            structure.worlds_accessible_from(w, &ag),
            BTreeSet::from([w1, w2])
        );

        let Ok(at_w) = Context::pointed(&structure, w) else {
            panic!("w is a world of the structure");
        };

        let [p, q, _, _] = pqrs();
        assert_eq!(Formula::possible("ag", p.clone()).evaluate(&at_w), Ok(true));
        assert_eq!(Formula::knows("ag", p.clone()).evaluate(&at_w), Ok(false));
        assert_eq!(Formula::possible("ag", q.clone()).evaluate(&at_w), Ok(true));
        assert_eq!(Formula::knows("ag", q.clone()).evaluate(&at_w), Ok(true));
        assert_eq!(
            Formula::possible("ag", Formula::and([p, Formula::not(q)])).evaluate(&at_w),
            Ok(false)
        );
    }

    #[test]
    fn group_and_common_knowledge() {
        let (a, b) = (AgentId::from("a"), AgentId::from("b"));
        let mut builder = StructureBuilder::default();
        let u = builder.world(KripkeWorld::named("u", [("p", true)]));
        let v = builder.world(KripkeWorld::named("v", [("p", true)]));
        let w = builder.world(KripkeWorld::named("w", [("p", false)]));
        assert!(builder.indistinguishable(&a, &[u, v]).is_ok());
        assert!(builder.indistinguishable(&b, &[v, w]).is_ok());
        let structure = builder.build();

        let Ok(at_u) = Context::pointed(&structure, u) else {
            panic!("u is a world of the structure");
        };

        let p = Formula::atom("p");
        assert_eq!(Formula::everybody_knows(["a"], p.clone()).evaluate(&at_u), Ok(true));
        assert_eq!(Formula::everybody_knows(["a", "b"], p.clone()).evaluate(&at_u), Ok(true));
        assert_eq!(Formula::common_knowledge(["a"], p.clone()).evaluate(&at_u), Ok(true));
        assert_eq!(Formula::common_knowledge(["a", "b"], p.clone()).evaluate(&at_u), Ok(false));

        let Ok(at_v) = Context::pointed(&structure, v) else {
            panic!("v is a world of the structure");
        };
        assert_eq!(Formula::everybody_knows(["a", "b"], p).evaluate(&at_v), Ok(false));
    }

    #[test]
    fn propositional_context() {
        let valuation = epistemic_kbp::structures::valuation::Valuation::from_pairs([("p", true)]);
        let context = Context::from_valuation(&valuation);

        assert_eq!(Formula::atom("q").evaluate(&context), Ok(false));
        assert_eq!(Formula::top().evaluate(&context), Ok(true));
        assert_eq!(Formula::bottom().evaluate(&context), Ok(false));
        assert_eq!(
            Formula::implies(Formula::atom("q"), Formula::bottom()).evaluate(&context),
            Ok(true)
        );
        assert_eq!(
            Formula::or([Formula::atom("p"), Formula::possible("a", Formula::top())])
                .evaluate(&context),
            Ok(true)
        );
        assert_eq!(
            Formula::and([Formula::atom("p"), Formula::possible("a", Formula::top())])
                .evaluate(&context),
            Err(EvaluationError::UnpointedModal)
        );
    }
}
