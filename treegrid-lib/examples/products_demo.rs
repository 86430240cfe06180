//! Product catalog walkthrough: load a record forest from a mock source,
//! then filter, sort, expand and page it.
//!
//! Run with: cargo run --example products_demo

use std::time::Duration;

use treegrid_lib::columns::cell_indent;
use treegrid_lib::engine::Table;
use treegrid_lib::engine::TableHooks;
use treegrid_lib::engine::TableOptions;
use treegrid_lib::engine::TableView;
use treegrid_lib::model::Record;
use treegrid_lib::model::RowId;
use treegrid_lib::model::Value;
use treegrid_lib::schema::ColumnSchema;
use treegrid_lib::schema::Schema;
use treegrid_lib::source::MockSource;
use treegrid_lib::source::RecordSource;

fn catalog() -> Vec<Record> {
    vec![
        Record::new()
            .set("name", "Drinks")
            .set("category", "Drinks")
            .child(
                Record::new()
                    .set("name", "Spirits")
                    .set("category", "Drinks")
                    .set("subcategory", "Spirits")
                    .child(
                        Record::new()
                            .set("name", "Dark Rum")
                            .set("category", "Drinks")
                            .set("subcategory", "Spirits")
                            .set("brand", "Old Harbor")
                            .set("price", 24.5f64),
                    )
                    .child(
                        Record::new()
                            .set("name", "Gin")
                            .set("category", "Drinks")
                            .set("subcategory", "Spirits")
                            .set("brand", "Juniper & Co")
                            .set("price", 19i64),
                    ),
            )
            .child(
                Record::new()
                    .set("name", "Cola")
                    .set("category", "Drinks")
                    .set("subcategory", "Soft Drinks")
                    .set("brand", "Fizzr")
                    .set("price", 2i64)
                    .set("imageUrl", "https://example.com/img/cola.png"),
            ),
        Record::new()
            .set("name", "Sourdough Bread")
            .set("category", "Food")
            .set("brand", "Corner Bakery")
            .set("price", 4i64),
        Record::new()
            .set("name", "Cheddar")
            .set("category", "Food")
            .set("brand", "Dale Farms")
            .set("price", 7i64),
    ]
}

fn print_view(view: &TableView) {
    for row in &view.body_rows {
        let indent = " ".repeat(cell_indent(row.depth) as usize / 8);
        let marker = if row.expandable {
            if row.expanded { "v " } else { "> " }
        } else {
            "  "
        };
        let name = view.cell_text(&row.id, "name").unwrap_or("");
        let price = view.cell_text(&row.id, "price").unwrap_or("");
        println!("{indent}{marker}{name:<20} {price}");
    }
    println!(
        "-- {} top-level rows, {} pages\n",
        view.top_level_count, view.page_count
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let schema = Schema::new(vec![
        ColumnSchema::text("name", "Product"),
        ColumnSchema::select("category", "Category", ["Drinks", "Food"]),
        ColumnSchema::text("subcategory", "Subcategory"),
        ColumnSchema::number("price", "Price"),
        ColumnSchema::text("brand", "Brand"),
        ColumnSchema::custom("imageUrl", "Image"),
    ])
    .expect("schema is valid");

    let source = MockSource::new(catalog()).with_delay(Duration::from_millis(50));
    let records = source.fetch().await.expect("mock fetch succeeds");

    let options = TableOptions::new()
        .with_selection()
        .with_sorting()
        .with_expansion()
        .with_pagination();
    let hooks = TableHooks::new()
        .on_edit_row(|record| println!("edit requested: {}", record.accessor("name").normalize()));

    let mut table = Table::new(schema, options).with_hooks(hooks);
    table.set_records(records);

    println!("initial view:");
    print_view(&table.view());

    println!("expand everything, then collapse the Spirits branch:");
    table.toggle_expand_all();
    table.toggle_row(&RowId::root(0).child(0));
    print_view(&table.view());

    println!("filter name ~ \"rum\" (subtree search):");
    table.apply_filter("name", Value::from("rum"));
    print_view(&table.view());

    println!("clear the filter, sort by price descending:");
    table.remove_filter("name");
    table.toggle_sort("price");
    table.toggle_sort("price");
    print_view(&table.view());

    table.request_edit(&RowId::root(0));
}
