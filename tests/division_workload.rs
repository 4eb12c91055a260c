//! End-to-end checks of the setup / run_operation contract

use udivbench::config::workload::{DivisorType, TrialConfig};
use udivbench::kernel::{unsigned_divide, unsigned_remainder, Operation};
use udivbench::operand::source::ScriptedSource;
use udivbench::operand::generate_with;
use udivbench::runner::{run_named, run_operation, setup};
use udivbench::BenchError;

fn reference_configs() -> Vec<TrialConfig> {
    DivisorType::ALL
        .into_iter()
        .map(|ty| TrialConfig::new(ty, 1024))
        .collect()
}

#[test]
fn setup_is_reproducible() {
    for config in reference_configs() {
        let first = setup(&config).unwrap();
        let second = setup(&config).unwrap();
        assert_eq!(first.dividends, second.dividends, "{}", config);
        assert_eq!(first.divisors, second.divisors, "{}", config);
    }
}

#[test]
fn setup_shapes_divisors() {
    for config in reference_configs() {
        let buffers = setup(&config).unwrap();
        assert_eq!(buffers.len(), 1024);
        assert!(buffers.divisors.iter().all(|&d| d != 0));

        match config.divisor_type {
            DivisorType::Positive => assert!(buffers.divisors.iter().all(|&d| d > 0)),
            DivisorType::Negative => assert!(buffers.divisors.iter().all(|&d| d < 0)),
            DivisorType::Mixed => {
                assert!(buffers.divisors.iter().any(|&d| d > 0));
                assert!(buffers.divisors.iter().any(|&d| d < 0));
            }
        }
    }
}

#[test]
fn most_negative_candidate_becomes_most_positive() {
    let mut source = ScriptedSource::new(vec![-1, i64::MIN]);
    let buffers = generate_with(&TrialConfig::new(DivisorType::Positive, 3), &mut source);
    assert_eq!(buffers.divisors, vec![i64::MAX; 3]);
}

#[test]
fn unsigned_semantics_of_all_ones() {
    assert_eq!(unsigned_divide(-1, 2), 9_223_372_036_854_775_807);
    assert_eq!(unsigned_remainder(-1, 2), 1);
}

#[test]
fn every_operation_matches_scalar_reference() {
    for config in reference_configs() {
        let pristine = setup(&config).unwrap();

        for op in Operation::ALL {
            let mut buffers = pristine.clone();
            run_operation(op, &mut buffers);

            for i in 0..buffers.len() {
                let n = pristine.dividends[i];
                let d = pristine.divisors[i];
                match op {
                    Operation::DivideUnsigned => {
                        assert_eq!(buffers.quotients[i], ((n as u64) / (d as u64)) as i64)
                    }
                    Operation::RemainderUnsigned => {
                        assert_eq!(buffers.remainders[i], ((n as u64) % (d as u64)) as i64)
                    }
                    Operation::DivideRemainderUnsigned => {
                        assert_eq!(buffers.quotients[i], ((n as u64) / (d as u64)) as i64);
                        assert_eq!(buffers.remainders[i], ((n as u64) % (d as u64)) as i64);
                    }
                    Operation::DivideConstantBounded => {
                        assert_eq!(buffers.quotients[i], (n as i32 as i64) / 7)
                    }
                    Operation::DivideUnsignedConstant => {
                        assert_eq!(buffers.quotients[i], ((n as u64) / 7) as i64)
                    }
                    Operation::DivideUnsignedConstantBounded => {
                        assert_eq!(buffers.quotients[i], (n as u32 as i64) / 15)
                    }
                    Operation::RemainderUnsignedConstant => {
                        assert_eq!(buffers.remainders[i], ((n as u64) % 7) as i64)
                    }
                }
            }
        }
    }
}

#[test]
fn repeated_runs_are_last_write_wins() {
    let config = TrialConfig::new(DivisorType::Mixed, 1024);
    let mut buffers = setup(&config).unwrap();

    run_named("divideUnsignedConstant", &mut buffers).unwrap();
    let by_seven = buffers.quotients.clone();
    run_named("divideUnsignedConstantBounded", &mut buffers).unwrap();
    assert_ne!(buffers.quotients, by_seven);
    run_named("divideUnsignedConstant", &mut buffers).unwrap();
    assert_eq!(buffers.quotients, by_seven);
}

#[test]
fn unknown_operation_name_is_rejected() {
    let mut buffers = setup(&TrialConfig::default()).unwrap();
    assert_eq!(
        run_named("divideByZero", &mut buffers),
        Err(BenchError::UnknownOperation("divideByZero".to_string()))
    );
}
