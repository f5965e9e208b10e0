//! Generate the standard fixture files in the current directory

use forest_fixtures::prelude::*;
use forest_fixtures::properties;

fn main() -> forest_fixtures::Result<()> {
    println!("=== Forest fixture generation ===\n");

    for spec in standard_fixtures() {
        let forest = spec.build();
        let path = spec.write_to(".")?;

        println!(
            "{}: {} nodes, {} edges, {} components",
            path.display(),
            forest.total_nodes(),
            properties::edge_count(forest.matrix()),
            properties::component_count(forest.matrix()),
        );
    }

    println!("\nDone.");
    Ok(())
}
