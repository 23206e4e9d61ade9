//! Conformance suite and thread stress harness, shared with downstream crates through the
//! `testing` feature.


#[cfg(test)]
mod test_suite {
    use super::suite;
    use crate::{MaxFirst, MinFirst, PriorityQueue};

    struct MinTester;

    impl suite::Tester for MinTester {
        type Order = MinFirst;

        fn create_queue(&self) -> PriorityQueue<u64, MinFirst> {
            PriorityQueue::new()
        }
    }

    struct MaxTester;

    impl suite::Tester for MaxTester {
        type Order = MaxFirst;

        fn create_queue(&self) -> PriorityQueue<u64, MaxFirst> {
            PriorityQueue::with_capacity_and_order(1_024, MaxFirst)
        }
    }

    macro_rules! suite_tests {
        ($($name:ident),* $(,)?) => {
            mod min_first {
                $(
                    #[test]
                    fn $name() {
                        super::suite::$name(super::MinTester);
                    }
                )*
            }

            mod max_first {
                $(
                    #[test]
                    fn $name() {
                        super::suite::$name(super::MaxTester);
                    }
                )*
            }
        };
    }

    suite_tests!(
        heap_invariant,
        extract_order,
        round_trip_size,
        empty_errors,
        blocking_handoff,
        blocking_peek,
        shutdown_wakes_all,
        shutdown_releases_waiting_pushers,
        single_slot_handoff,
        concurrent_push,
        concurrent_push_and_pop,
    );
}
