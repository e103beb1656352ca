//! Shared test domain
//!
//! A small user/address model on top of the standard types:
//!
//! ```text
//! User { name: String, address: Address, created: Timestamp (epoch millis), tags: Collection<String> }
//! Address { city: String }
//! ```

#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use domex_ast::{
    ComparisonPredicate, Expression, ExpressionPredicate, FunctionInvocation, Literal, Path, Predicate,
};
use domex_eval::builtin::{self, EntityAttributeAccessor, EpochMillisTypeAdapter};
use domex_eval::{ExpressionEngine, standard_model};
use domex_model::{
    DomainFunction, DomainModel, DomainModelBuilder, DomainType, DomainTypeRef, EntityAttribute,
    EvaluationContext,
};
use domex_types::{ComparisonOperator, EntityValue, Value};
use rstest::fixture;
use std::sync::Arc;

/// 2024-01-01T00:00:00Z
pub const CREATED_MILLIS: i64 = 1_704_067_200_000;

pub struct Domain {
    pub model: Arc<DomainModel>,
    pub boolean: DomainTypeRef,
    pub integer: DomainTypeRef,
    pub decimal: DomainTypeRef,
    pub string: DomainTypeRef,
    pub date: DomainTypeRef,
    pub local_date: DomainTypeRef,
    pub timestamp: DomainTypeRef,
    pub interval: DomainTypeRef,
    pub integers: DomainTypeRef,
    pub user: DomainTypeRef,
    pub address: DomainTypeRef,
    pub user_name: Arc<EntityAttribute>,
    pub user_address: Arc<EntityAttribute>,
    pub user_created: Arc<EntityAttribute>,
    pub user_tags: Arc<EntityAttribute>,
    pub address_city: Arc<EntityAttribute>,
    /// Declared without an invoker: evaluating it fails
    pub explode: Arc<DomainFunction>,
}

fn standard(builder: &DomainModelBuilder, name: &str) -> DomainTypeRef {
    builder.domain_type(name).cloned().expect("standard type")
}

#[fixture]
pub fn domain() -> Domain {
    let mut builder = standard_model();
    let boolean = standard(&builder, builtin::BOOLEAN);
    let integer = standard(&builder, builtin::INTEGER);
    let decimal = standard(&builder, builtin::DECIMAL);
    let string = standard(&builder, builtin::STRING);
    let date = standard(&builder, builtin::DATE);
    let local_date = standard(&builder, builtin::LOCAL_DATE);
    let timestamp = standard(&builder, builtin::TIMESTAMP);
    let interval = standard(&builder, builtin::INTERVAL);
    let integers = standard(&builder, &builtin::collection_type_name(builtin::INTEGER));
    let strings = standard(&builder, &builtin::collection_type_name(builtin::STRING));

    let user = DomainType::entity("User").into_ref();
    let address = DomainType::entity("Address").into_ref();
    let accessor = Arc::new(EntityAttributeAccessor);

    let user_name = EntityAttribute::new("User", "name", string.clone())
        .with_accessor(accessor.clone())
        .into_ref();
    let user_address = EntityAttribute::new("User", "address", address.clone())
        .with_accessor(accessor.clone())
        .into_ref();
    let user_created = EntityAttribute::new("User", "created", timestamp.clone())
        .with_accessor(accessor.clone())
        .with_adapter(Arc::new(EpochMillisTypeAdapter))
        .into_ref();
    let user_tags = EntityAttribute::new("User", "tags", strings)
        .with_accessor(accessor.clone())
        .into_ref();
    let address_city = EntityAttribute::new("Address", "city", string.clone())
        .with_accessor(accessor)
        .into_ref();
    let explode = DomainFunction::new("EXPLODE", boolean.clone()).into_ref();

    builder.add_type(user.clone());
    builder.add_type(address.clone());
    for attribute in [&user_name, &user_address, &user_created, &user_tags, &address_city] {
        builder.add_attribute(attribute.clone());
    }
    builder.add_function(explode.clone());

    Domain {
        model: Arc::new(builder.build()),
        boolean,
        integer,
        decimal,
        string,
        date,
        local_date,
        timestamp,
        interval,
        integers,
        user,
        address,
        user_name,
        user_address,
        user_created,
        user_tags,
        address_city,
        explode,
    }
}

pub fn user_value(name: &str, city: Option<&str>) -> Value {
    let mut user = EntityValue::new("User")
        .with("name", name)
        .with("created", CREATED_MILLIS)
        .with(
            "tags",
            Value::Collection(vec![Value::string("admin"), Value::string("ops")]),
        );
    if let Some(city) = city {
        user.set("address", EntityValue::new("Address").with("city", city).into());
    }
    Value::Entity(user)
}

pub fn ctx_with_user(name: &str, city: Option<&str>) -> EvaluationContext {
    EvaluationContext::new().with_root("user", user_value(name, city))
}

impl Domain {
    pub fn engine(&self) -> ExpressionEngine {
        ExpressionEngine::new(self.model.clone())
    }

    // === Literals ===

    pub fn int(&self, value: i64) -> Expression {
        Literal::scalar(self.integer.clone(), value).into()
    }

    pub fn dec(&self, value: &str) -> Expression {
        Literal::scalar(self.decimal.clone(), Value::decimal_str(value)).into()
    }

    pub fn text(&self, value: &str) -> Expression {
        Literal::scalar(self.string.clone(), value).into()
    }

    pub fn boolean(&self, value: bool) -> Expression {
        Literal::scalar(self.boolean.clone(), value).into()
    }

    pub fn date(&self, y: i32, m: u32, d: u32) -> Expression {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        Literal::scalar(self.date.clone(), date).into()
    }

    pub fn instant(&self, y: i32, m: u32, d: u32, h: u32) -> Expression {
        let instant = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        Literal::scalar(self.timestamp.clone(), instant).into()
    }

    pub fn null(&self, ty: &DomainTypeRef) -> Expression {
        Literal::null(ty.clone()).into()
    }

    pub fn ints(&self, values: &[i64]) -> Vec<Expression> {
        values.iter().map(|v| self.int(*v)).collect()
    }

    // === Paths ===

    pub fn user_path(&self, attributes: &[&Arc<EntityAttribute>]) -> Expression {
        let attributes = attributes.iter().map(|a| Arc::clone(a)).collect();
        Path::from_root("user", self.user.clone(), attributes).into()
    }

    // === Predicates ===

    pub fn compare(&self, left: Expression, operator: ComparisonOperator, right: Expression) -> Predicate {
        ComparisonPredicate::new(self.boolean.clone(), left, operator, right).into()
    }

    /// Definite predicate
    pub fn truth(&self, value: bool) -> Predicate {
        ExpressionPredicate::new(self.boolean.clone(), self.boolean(value), false).into()
    }

    /// Predicate that evaluates to unknown
    pub fn unknown(&self) -> Predicate {
        self.compare(self.null(&self.integer), ComparisonOperator::Equal, self.int(1))
    }

    /// Predicate that fails with a missing invoker if it is ever evaluated
    pub fn raising(&self) -> Predicate {
        let call = FunctionInvocation::new(self.explode.clone());
        ExpressionPredicate::new(self.boolean.clone(), call.into(), false).into()
    }
}
