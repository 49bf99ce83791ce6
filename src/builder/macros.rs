//! Macros for declaring machines.

/// Declare a machine with its initial state and per-state tables.
///
/// Each transition is written `symbol => next_state / output`; the
/// `/ output` part may be left out for transitions that emit nothing.
/// Expands to a [`MachineBuilder`](crate::builder::MachineBuilder) chain and
/// evaluates to `Result<MealyMachine<_, _>, BuildError>`.
///
/// # Example
///
/// ```
/// use mealy::{mealy, MealyMachine};
///
/// let mut fsm: MealyMachine = mealy! {
///     initial: "S0";
///     "S0" => { 1 => "S1" / "Output_A", 0 => "S0" / "Output_B" },
///     "S1" => { 1 => "S1" / "Output_C", 0 => "S0" },
/// }
/// .unwrap();
///
/// fsm.execute([(1, 1), (2, 0)]).unwrap();
/// assert_eq!(fsm.outputs(), vec!["Output_A"]);
/// ```
#[macro_export]
macro_rules! mealy {
    (
        initial: $initial:expr;
        $(
            $state:literal => {
                $( $symbol:literal => $next:literal $(/ $output:literal)? ),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::builder::MachineBuilder::new()
            .initial($initial)
            $(
                .node(
                    $crate::core::Node::new($state)
                        $( .with_edge($symbol, $next, $crate::__mealy_output!($($output)?)) )*
                )
            )*
            .build()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __mealy_output {
    () => {
        ::core::option::Option::None
    };
    ($output:literal) => {
        ::core::option::Option::Some($output)
    };
}
