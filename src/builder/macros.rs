//! Macros for declarative state graph construction.

/// Build and validate a machine from a list of `from => to` edges.
///
/// State names are written as identifiers; `start` and `finish` refer to the
/// sentinel states. Expands to a [`MachineBuilder`](crate::builder::MachineBuilder)
/// chain and evaluates to `Result<StateMachine, BuildError>`. An optional
/// [`MachineConfig`](crate::machine::MachineConfig) may follow the name.
///
/// # Example
///
/// ```
/// use stategraph::state_graph;
///
/// let mut door = state_graph!("door";
///     start => closed,
///     closed => open,
///     open => closed,
///     closed => finish,
/// )
/// .unwrap();
///
/// door.move_to("closed").unwrap();
/// door.move_to("open").unwrap();
/// assert_eq!(door.current_state(), "open");
/// ```
#[macro_export]
macro_rules! state_graph {
    (
        $name:expr, $config:expr;
        $($from:ident => $to:ident),* $(,)?
    ) => {
        $crate::builder::MachineBuilder::new($name)
            .config($config)
            $(.connect(stringify!($from), stringify!($to)))*
            .build()
    };

    (
        $name:expr;
        $($from:ident => $to:ident),* $(,)?
    ) => {
        $crate::builder::MachineBuilder::new($name)
            $(.connect(stringify!($from), stringify!($to)))*
            .build()
    };
}
