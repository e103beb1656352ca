//! Evaluator benchmarks using divan
//!
//! Benchmarks for expression evaluation performance.

use domex::prelude::*;
use std::sync::Arc;

fn main() {
    divan::main();
}

struct Bench {
    engine: ExpressionEngine,
    boolean: DomainTypeRef,
    integer: DomainTypeRef,
    string: DomainTypeRef,
    integers: DomainTypeRef,
    user: DomainTypeRef,
    name: Arc<EntityAttribute>,
}

fn bench() -> Bench {
    let mut builder = standard_model();
    let lookup = |name: &str| builder.domain_type(name).cloned().expect("standard type");
    let boolean = lookup("Boolean");
    let integer = lookup("Integer");
    let string = lookup("String");
    let integers = lookup("Collection<Integer>");
    let user = DomainType::entity("User").into_ref();
    let name = EntityAttribute::new("User", "name", string.clone())
        .with_accessor(Arc::new(EntityAttributeAccessor))
        .into_ref();
    builder.add_type(user.clone());
    builder.add_attribute(name.clone());
    Bench {
        engine: ExpressionEngine::new(Arc::new(builder.build())),
        boolean,
        integer,
        string,
        integers,
        user,
        name,
    }
}

impl Bench {
    fn int(&self, value: i64) -> Expression {
        Literal::scalar(self.integer.clone(), value).into()
    }

    fn add(&self, left: Expression, right: Expression) -> Expression {
        ChainingArithmeticExpression::new(self.integer.clone(), left, right, DomainOperator::Plus).into()
    }

    fn greater(&self, left: i64, right: i64) -> Predicate {
        ComparisonPredicate::new(self.boolean.clone(), self.int(left), ComparisonOperator::Greater, self.int(right)).into()
    }
}

// === Literal Evaluation Benchmarks ===

mod literals {
    use super::*;

    #[divan::bench]
    fn integer_literal(bencher: divan::Bencher) {
        let b = bench();
        let expr = b.int(42);

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }

    #[divan::bench]
    fn string_literal(bencher: divan::Bencher) {
        let b = bench();
        let expr: Expression = Literal::scalar(b.string.clone(), "Hello, World!").into();

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }
}

// === Arithmetic Operation Benchmarks ===

mod arithmetic {
    use super::*;

    #[divan::bench]
    fn simple_addition(bencher: divan::Bencher) {
        let b = bench();
        let expr = b.add(b.int(1), b.int(2));

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }

    #[divan::bench]
    fn complex_arithmetic(bencher: divan::Bencher) {
        let b = bench();

        // (1 + 2) * 3 - -4
        let sum = b.add(b.int(1), b.int(2));
        let product = ChainingArithmeticExpression::new(b.integer.clone(), sum, b.int(3), DomainOperator::Multiply);
        let negative = ArithmeticFactor::new(b.int(4), true);
        let expr: Expression =
            ChainingArithmeticExpression::new(b.integer.clone(), product.into(), negative.into(), DomainOperator::Minus)
                .into();

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }
}

// === Predicate Benchmarks ===

mod predicates {
    use super::*;

    #[divan::bench]
    fn integer_comparison(bencher: divan::Bencher) {
        let b = bench();
        let predicate = b.greater(10, 5);

        bencher.bench_local(|| b.engine.evaluate_predicate(divan::black_box(&predicate), None));
    }

    #[divan::bench]
    fn between(bencher: divan::Bencher) {
        let b = bench();
        let predicate: Predicate = BetweenPredicate::new(b.boolean.clone(), b.int(5), b.int(1), b.int(10), false).into();

        bencher.bench_local(|| b.engine.evaluate_predicate(divan::black_box(&predicate), None));
    }

    #[divan::bench]
    fn path_comparison(bencher: divan::Bencher) {
        let b = bench();
        let name: Expression = Path::from_root("user", b.user.clone(), vec![b.name.clone()]).into();
        let ann: Expression = Literal::scalar(b.string.clone(), "Ann").into();
        let predicate: Predicate = ComparisonPredicate::new(b.boolean.clone(), name, ComparisonOperator::Equal, ann).into();
        let ctx = EvaluationContext::new().with_root("user", EntityValue::new("User").with("name", "Ann"));

        bencher.bench_local(|| b.engine.evaluate_predicate(divan::black_box(&predicate), Some(&ctx)));
    }
}

// === Scaling Benchmarks ===

mod scaling {
    use super::*;

    #[divan::bench(args = [10, 50, 100, 200])]
    fn arithmetic_chain_scaling(bencher: divan::Bencher, n: usize) {
        let b = bench();

        let mut expr = b.int(1);
        for _ in 1..n {
            expr = b.add(expr, b.int(1));
        }

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }

    #[divan::bench(args = [10, 100, 1000])]
    fn in_list_scaling(bencher: divan::Bencher, n: usize) {
        let b = bench();
        let items = (0..n as i64).map(|i| b.int(i)).collect();
        let predicate: Predicate = InPredicate::new(b.boolean.clone(), b.int(-1), items, false).into();

        bencher.bench_local(|| b.engine.evaluate_predicate(divan::black_box(&predicate), None));
    }

    #[divan::bench(args = [10, 100, 1000])]
    fn collection_literal_scaling(bencher: divan::Bencher, n: usize) {
        let b = bench();
        let elements = (0..n as i64).map(|i| b.int(i)).collect();
        let expr: Expression = Literal::collection(b.integers.clone(), elements).into();

        bencher.bench_local(|| b.engine.evaluate(divan::black_box(&expr), None));
    }

    #[divan::bench(args = [10, 100, 1000])]
    fn conjunction_scaling(bencher: divan::Bencher, n: usize) {
        let b = bench();
        let members = (0..n as i64).map(|i| b.greater(i + 1, i)).collect();
        let predicate: Predicate = CompoundPredicate::and(b.boolean.clone(), members).into();

        bencher.bench_local(|| b.engine.evaluate_predicate(divan::black_box(&predicate), None));
    }
}
