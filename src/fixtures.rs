// ============================================================================
// Test Fixtures
// Host models shaped like document-store and relational records
// ============================================================================

use crate::domain::{Attribute, Field, FieldKind, OperableResult, Schema};
use crate::interfaces::{downcast, Model, Operable};
use crate::numeric::Number;
use chrono::NaiveDate;
use std::sync::Once;
use uuid::Uuid;

static SETUP: Once = Once::new();

/// Register the field selections of every fixture, once per test binary.
pub(crate) fn setup() {
    SETUP.call_once(|| {
        Business::select(["employees", "revenue"]);
        OtherBusiness::select(["employees"]);
        OtherBusiness::select(["taxes"]);
        SecondBusiness::select_all().expect("declared schema");
        ThirdBusiness::select_all_except(["revenue", "taxes"]).expect("declared schema");
        Item::select(["inventory"]);

        City::select(["population", "revenue", "dump"]);
        Dump::select(["employees", "weight"]);
        Town::select_all().expect("column schema");

        First::select_all().expect("declared schema");
        First::select(["second"]);
        Second::select_all().expect("declared schema");
    });
}

fn document_fields(names: &[(&str, FieldKind)]) -> Vec<Field> {
    let mut fields = vec![
        Field::new("_id", FieldKind::Other),
        Field::new("_type", FieldKind::String),
        Field::new("created_at", FieldKind::DateTime),
        Field::new("updated_at", FieldKind::DateTime),
        Field::new("version", FieldKind::Integer),
    ];
    fields.extend(names.iter().map(|(name, kind)| Field::new(*name, *kind)));
    fields
}

// ============================================================================
// Document models
// ============================================================================

macro_rules! business_model {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub(crate) struct $name {
            pub id: Uuid,
            pub employees: Option<i64>,
            pub revenue: Option<f64>,
            pub taxes: Option<f64>,
        }

        impl $name {
            pub(crate) fn new(employees: i64, revenue: f64, taxes: f64) -> Self {
                Self {
                    id: Uuid::new_v4(),
                    employees: Some(employees),
                    revenue: Some(revenue),
                    taxes: Some(taxes),
                }
            }
        }

        impl Operable for $name {
            fn attribute(&self, name: &str) -> Attribute {
                match name {
                    "employees" => self.employees.map(Number::from).into(),
                    "revenue" => self.revenue.map(Number::from).into(),
                    "taxes" => self.taxes.map(Number::from).into(),
                    _ => Attribute::Undeclared,
                }
            }

            fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
                match name {
                    "employees" => self.employees = Some(value.to_i64()?),
                    "revenue" => self.revenue = Some(value.to_f64()),
                    "taxes" => self.taxes = Some(value.to_f64()),
                    _ => {},
                }
                Ok(())
            }
        }

        impl Model for $name {
            fn schema() -> Schema {
                Schema::Declared(document_fields(&[
                    ("employees", FieldKind::Integer),
                    ("revenue", FieldKind::Float),
                    ("taxes", FieldKind::Float),
                ]))
            }
        }
    };
}

business_model!(Business);
business_model!(OtherBusiness);
business_model!(SecondBusiness);
business_model!(ThirdBusiness);

/// Never configured
#[derive(Debug, Clone, Default)]
pub(crate) struct Account {
    pub dollars: Option<i64>,
}

impl Operable for Account {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "dollars" => self.dollars.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        if name == "dollars" {
            self.dollars = Some(value.to_i64()?);
        }
        Ok(())
    }
}

impl Model for Account {
    fn schema() -> Schema {
        Schema::Declared(document_fields(&[("dollars", FieldKind::Integer)]))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Item {
    pub inventory: Option<i64>,
    pub price: Option<f64>,
}

impl Operable for Item {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "inventory" => self.inventory.map(Number::from).into(),
            "price" => self.price.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "inventory" => self.inventory = Some(value.to_i64()?),
            "price" => self.price = Some(value.to_f64()),
            _ => {},
        }
        Ok(())
    }
}

impl Model for Item {}

/// Document with an embedded `Second`
#[derive(Debug, Clone, Default)]
pub(crate) struct First {
    pub id: Uuid,
    pub a: Option<i64>,
    pub b: Option<i64>,
    pub second: Option<Box<Second>>,
}

impl Operable for First {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "a" => self.a.map(Number::from).into(),
            "b" => self.b.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn relation(&self, name: &str) -> Option<&dyn Operable> {
        match name {
            "second" => self.second.as_deref().map(|s| s as &dyn Operable),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "a" => self.a = Some(value.to_i64()?),
            "b" => self.b = Some(value.to_i64()?),
            _ => {},
        }
        Ok(())
    }

    fn set_relation(&mut self, name: &str, value: Box<dyn Operable>) {
        if name == "second" {
            self.second = downcast::<Second>(value);
        }
    }
}

impl Model for First {
    fn schema() -> Schema {
        Schema::Declared(document_fields(&[
            ("a", FieldKind::Integer),
            ("b", FieldKind::Integer),
        ]))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Second {
    pub id: Uuid,
    pub c: Option<i64>,
    pub d: Option<i64>,
}

impl Second {
    pub(crate) fn new(c: i64, d: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            c: Some(c),
            d: Some(d),
        }
    }
}

impl Operable for Second {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "c" => self.c.map(Number::from).into(),
            "d" => self.d.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "c" => self.c = Some(value.to_i64()?),
            "d" => self.d = Some(value.to_i64()?),
            _ => {},
        }
        Ok(())
    }
}

impl Model for Second {
    fn schema() -> Schema {
        Schema::Declared(document_fields(&[
            ("c", FieldKind::Integer),
            ("d", FieldKind::Integer),
        ]))
    }
}

// ============================================================================
// Relational models
// ============================================================================

fn city_columns() -> Vec<Field> {
    vec![
        Field::new("id", FieldKind::Integer),
        Field::new("population", FieldKind::Integer),
        Field::new("revenue", FieldKind::Float),
        Field::new("established", FieldKind::Date),
    ]
}

/// Row with untyped numeric attributes and a has-one `Dump`
#[derive(Debug, Clone, Default)]
pub(crate) struct City {
    pub id: Option<i64>,
    pub population: Option<Number>,
    pub revenue: Option<Number>,
    pub established: Option<NaiveDate>,
    pub dump: Option<Box<Dump>>,
}

impl City {
    pub(crate) fn new(population: impl Into<Number>, revenue: impl Into<Number>) -> Self {
        Self {
            population: Some(population.into()),
            revenue: Some(revenue.into()),
            ..Self::default()
        }
    }

    pub(crate) fn with_dump(mut self, dump: Dump) -> Self {
        self.dump = Some(Box::new(dump));
        self
    }

    pub(crate) fn established(mut self, year: i32, month: u32, day: u32) -> Self {
        self.established = NaiveDate::from_ymd_opt(year, month, day);
        self
    }
}

impl Operable for City {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "id" => self.id.map(Number::from).into(),
            "population" => self.population.into(),
            "revenue" => self.revenue.into(),
            _ => Attribute::Undeclared,
        }
    }

    fn relation(&self, name: &str) -> Option<&dyn Operable> {
        match name {
            "dump" => self.dump.as_deref().map(|d| d as &dyn Operable),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "population" => self.population = Some(value),
            "revenue" => self.revenue = Some(value),
            _ => {},
        }
        Ok(())
    }

    fn set_relation(&mut self, name: &str, value: Box<dyn Operable>) {
        if name == "dump" {
            self.dump = downcast::<Dump>(value);
        }
    }
}

impl Model for City {
    fn schema() -> Schema {
        Schema::Columns(city_columns())
    }
}

/// Row belonging to a `City`
#[derive(Debug, Clone, Default)]
pub(crate) struct Dump {
    pub id: Option<i64>,
    pub city_id: Option<i64>,
    pub employees: Option<i64>,
    pub weight: Option<i64>,
}

impl Dump {
    pub(crate) fn new(employees: i64, weight: i64) -> Self {
        Self {
            employees: Some(employees),
            weight: Some(weight),
            ..Self::default()
        }
    }
}

impl Operable for Dump {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "id" => self.id.map(Number::from).into(),
            "city_id" => self.city_id.map(Number::from).into(),
            "employees" => self.employees.map(Number::from).into(),
            "weight" => self.weight.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "employees" => self.employees = Some(value.to_i64()?),
            "weight" => self.weight = Some(value.to_i64()?),
            _ => {},
        }
        Ok(())
    }
}

impl Model for Dump {
    fn schema() -> Schema {
        Schema::Columns(vec![
            Field::new("id", FieldKind::Integer),
            Field::new("city_id", FieldKind::Integer),
            Field::new("employees", FieldKind::Integer),
            Field::new("weight", FieldKind::Integer),
        ])
    }
}

/// Same columns as `City`, fields picked by introspection
#[derive(Debug, Clone, Default)]
pub(crate) struct Town {
    pub population: Option<Number>,
    pub revenue: Option<Number>,
}

impl Operable for Town {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "population" => self.population.into(),
            "revenue" => self.revenue.into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "population" => self.population = Some(value),
            "revenue" => self.revenue = Some(value),
            _ => {},
        }
        Ok(())
    }
}

impl Model for Town {
    fn schema() -> Schema {
        Schema::Columns(city_columns())
    }
}
