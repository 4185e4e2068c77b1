//! Demonstration of a ListStore driving a text "view"

use basket::{ListState, ListStore, StoreConfig};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
[id_strategy]
kind = "sequential"
namespace = "item"
"#;

fn render(state: &ListState) {
    if state.is_empty() {
        println!("   Your list is empty. Add some items!");
        return;
    }
    for item in state.items() {
        let mark = if item.is_purchased() { "x" } else { " " };
        println!("   [{}] {} ({})", mark, item.name(), item.id());
    }
    if let Some(summary) = state.summary() {
        println!("   {}", summary);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Grocery List ===\n");

    let store = ListStore::with_config(StoreConfig::from_toml_str(CONFIG)?)?;
    render(&store.state());

    // Redraw on every change
    println!("\n1. Subscribing a renderer");
    let _view = store.subscribe(|state| {
        println!("   --");
        render(state);
    });

    println!("\n2. Typing and submitting items");
    store.set_pending_input("Milk");
    store.submit_pending();
    store.add_item("  Bread  ");

    println!("\n3. Submitting blank text (nothing happens)");
    store.add_item("   ");

    println!("\n4. Marking bread as purchased");
    let bread = store.items()[1].id().clone();
    store.toggle_purchased(&bread);

    println!("\n5. Removing milk");
    let milk = store.items()[0].id().clone();
    store.remove_item(&milk);

    println!("\n6. Snapshot as JSON");
    println!("   {}", serde_json::to_string(&store.state())?);

    Ok(())
}
