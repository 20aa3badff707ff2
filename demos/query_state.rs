/// `QueryState` usage example
use query_state::{LocationReader, MemoryHost, ParamMap, ParamValue, QueryState, QueryStateOptions};

fn main() {
    // Any host works; MemoryHost stands in for a browser window here
    let host = MemoryHost::new("https://shop.example/catalog?page=1").with_title("Catalog");
    let mut state = QueryState::new(host, QueryStateOptions::default());

    // Construction synced from the location
    println!("initial: {:?}", state.get_values()); // {page: "1"}
    println!();

    // Replace the whole collection; arrays are encoded as `tags[]=a,b`
    state.set_all(
        ParamMap::from([
            ("page", ParamValue::from("2")),
            ("tags", ParamValue::from(["sale", "new"])),
        ]),
        None,
    );
    println!("after set_all: {}", state.host().href());

    // Overwrite one key, leaving the rest alone
    state.set(ParamMap::from([("page", "3")]), None);
    println!("after set: {}", state.host().href());

    // Remove a key (all stored instances, arrays included)
    state.remove("tags", None);
    println!("after remove: {}", state.host().href());
    println!();

    // Build a link elsewhere that carries the current query
    println!("link: {}", state.build_link("/checkout"));
    println!();

    // Every mutation pushed one history entry
    println!("history:");
    for entry in state.host().entries() {
        println!("  {} -> {}", entry.title, entry.url);
    }
}
