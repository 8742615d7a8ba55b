// ============================================================================
// Basic Usage Example
// ============================================================================

use operable::numeric::Number;
use operable::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Default)]
struct Warehouse {
    name: Option<String>,
    stock: Option<i64>,
    value: Option<Decimal>,
    manager: Option<Box<Manager>>,
}

impl Operable for Warehouse {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "stock" => self.stock.map(Number::from).into(),
            "value" => self.value.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn relation(&self, name: &str) -> Option<&dyn Operable> {
        match name {
            "manager" => self.manager.as_deref().map(|m| m as &dyn Operable),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        match name {
            "stock" => self.stock = Some(value.to_i64()?),
            "value" => self.value = Some(value.to_decimal()?),
            _ => {},
        }
        Ok(())
    }

    fn set_relation(&mut self, name: &str, value: Box<dyn Operable>) {
        if name == "manager" {
            self.manager = downcast::<Manager>(value);
        }
    }
}

impl Model for Warehouse {
    fn schema() -> Schema {
        Schema::Columns(vec![
            Field::new("id", FieldKind::Integer),
            Field::new("name", FieldKind::String),
            Field::new("stock", FieldKind::Integer),
            Field::new("value", FieldKind::Decimal),
        ])
    }
}

#[derive(Debug, Default)]
struct Manager {
    reports: Option<i64>,
}

impl Operable for Manager {
    fn attribute(&self, name: &str) -> Attribute {
        match name {
            "reports" => self.reports.map(Number::from).into(),
            _ => Attribute::Undeclared,
        }
    }

    fn set_attribute(&mut self, name: &str, value: Number) -> OperableResult<()> {
        if name == "reports" {
            self.reports = Some(value.to_i64()?);
        }
        Ok(())
    }
}

impl Model for Manager {}

fn warehouse(name: &str, stock: i64, value: Decimal, reports: i64) -> Warehouse {
    Warehouse {
        name: Some(name.to_string()),
        stock: Some(stock),
        value: Some(value),
        manager: Some(Box::new(Manager {
            reports: Some(reports),
        })),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    operable::utils::logging::init(tracing::Level::DEBUG)?;

    println!("=== Operable Example ===\n");

    // Numeric columns by introspection, plus the manager relation
    let fields = SelectionConfig::all().with_fields(["manager"]).apply::<Warehouse>()?;
    Manager::select(["reports"]);
    println!("Warehouse fields: {}", fields);
    println!("Manager fields: {:?}\n", Manager::selected_fields());

    let north = warehouse("north", 120, Decimal::new(1_500_050, 2), 4);
    let south = warehouse("south", 80, Decimal::new(999_925, 2), 3);

    println!("=== Combining ===");
    let total = north.add(&south)?;
    println!("Total stock: {:?}", total.stock);
    println!("Total value: {:?}", total.value);
    println!("Total reports: {:?}", total.manager.as_ref().and_then(|m| m.reports));
    println!("Name copied: {:?}", total.name);

    let diff = north.subtract(&south)?;
    println!("Stock difference: {:?}", diff.stock);

    println!("\n=== Scaling ===");
    let average = total.divide(2)?;
    println!("Average stock: {:?}", average.stock);
    println!("Average value: {:?}", average.value);

    match total.divide(0) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Dividing by zero: {}", e),
    }

    println!("\n=== Equality ===");
    let copy = warehouse("copy", 120, Decimal::new(1_500_050, 2), 4);
    println!("north matches copy: {}", north.matches(&copy)?);
    println!("north matches south: {}", north.matches(&south)?);

    println!("\n=== Snapshot ===");
    for (name, value) in north.operable_values()?.iter() {
        println!("  {} = {:?}", name, value);
    }

    Ok(())
}
