//! Login Flow
//!
//! This demo builds a login flow with the fluent builder, validates it, and
//! drives it through a successful sign-in.
//!
//! Key concepts:
//! - Declaring edges with `start`, `connect` and `finish`
//! - Validation before the machine is driven
//! - Transition logging through `tracing`
//! - Rejected moves leave the cursor in place
//!
//! Run with: cargo run --example login_flow

use stategraph::builder::MachineBuilder;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Login Flow Example ===\n");

    let mut login = MachineBuilder::new("login")
        .log_changes(true)
        .start("credentials")
        .connect("credentials", "credentials")
        .connect("credentials", "two_factor")
        .connect("credentials", "locked")
        .connect("two_factor", "credentials")
        .finish("two_factor")
        .finish("locked")
        .build()
        .unwrap();

    println!("Graph validated, current state: {}", login.current_state());

    for step in ["credentials", "credentials", "two_factor", "finish"] {
        login.move_to(step).unwrap();
    }

    println!("Signed in, current state: {}", login.current_state());

    match login.move_to("two_factor") {
        Ok(()) => println!("Unexpectedly moved past finish"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\n=== Example Complete ===");
}
