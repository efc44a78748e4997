//! Macros for ergonomic configuration.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from identifiers.
///
/// State and event names are taken verbatim from the identifiers, so their
/// casing is preserved in the configuration. The result is not validated;
/// [`StateMachine::new`](crate::StateMachine::new) does that.
///
/// # Example
///
/// ```
/// use statewise::machine_config;
///
/// let config = machine_config! {
///     initial: normal,
///     states: {
///         normal => { study => busy },
///         busy => { get_hungry => hungry },
///         hungry => { eat => normal },
///     }
/// };
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.state_names(), vec!["normal", "busy", "hungry"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $($event:ident => $target:ident),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::config::MachineConfig {
            initial: stringify!($initial).to_string(),
            states: vec![
                $(
                    (
                        stringify!($state).to_string(),
                        $crate::config::StateConfig {
                            transitions: vec![
                                $((stringify!($event).to_string(), stringify!($target).to_string())),*
                            ],
                        },
                    )
                ),*
            ],
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn machine_config_macro_builds_table() {
        let config = machine_config! {
            initial: Sleeping,
            states: {
                Sleeping => { get_up => Normal, get_hungry => Hungry },
                Normal => {},
                Hungry => { eat => Normal },
            }
        };

        assert_eq!(config.initial, "Sleeping");
        assert_eq!(config.state_names(), vec!["Sleeping", "Normal", "Hungry"]);
        let (_, sleeping) = config.find_state("sleeping").unwrap();
        assert_eq!(sleeping.target_for("get_hungry"), Some("Hungry"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn machine_config_macro_accepts_trailing_commas() {
        let config = machine_config! {
            initial: a,
            states: {
                a => { go => b, },
                b => {},
            },
        };

        assert_eq!(config.states.len(), 2);
    }
}
