//! Property tests for ledger ordering and per-period accounting.

use payoff_core::{DebtRecord, Ledger, Schedule, SimulationEngine};
use proptest::prelude::*;

const GUARD: u32 = 600;

fn tolerance(scale: f64) -> f64 {
    1e-9 * scale.abs().max(1.0)
}

fn record_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (
        0.0..5_000.0f64,
        prop::sample::select(vec![0.0, 0.04, 0.12, 0.18, 0.18, 0.29]),
        0.0..400.0f64,
    )
}

fn records_strategy() -> impl Strategy<Value = Vec<DebtRecord>> {
    prop::collection::vec(record_strategy(), 0..7).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (amount, rate, payment))| {
                DebtRecord::new(format!("debt-{i}"), amount, rate, payment)
            })
            .collect()
    })
}

fn simulate(records: Vec<DebtRecord>, extra: f64) -> Schedule {
    let ledger = Ledger::build(records).expect("generated records are valid");
    SimulationEngine::new(ledger, extra)
        .with_max_periods(GUARD)
        .run()
}

fn input_index(name: &str) -> usize {
    name.trim_start_matches("debt-").parse().unwrap()
}

proptest! {
    #[test]
    fn ledger_is_rate_descending_and_stable(records in records_strategy()) {
        let ledger = Ledger::build(records).unwrap();
        for pair in ledger.debts().windows(2) {
            prop_assert!(pair[0].rate >= pair[1].rate);
            if pair[0].rate == pair[1].rate {
                prop_assert!(input_index(&pair[0].name) < input_index(&pair[1].name));
            }
        }
    }

    #[test]
    fn every_period_conserves_money(records in records_strategy(), extra in -50.0..500.0f64) {
        let schedule = simulate(records, extra);
        for period in &schedule.periods {
            let mut starting = 0.0;
            let mut flows = 0.0;
            let mut ending = 0.0;
            for line in &period.lines {
                let expected =
                    line.starting + line.interest + line.minimum_payment + line.excess_payment;
                prop_assert!((line.ending - expected).abs() <= tolerance(line.starting));
                starting += line.starting;
                flows += line.interest + line.minimum_payment + line.excess_payment;
                ending += line.ending;
            }
            prop_assert!((ending - (starting + flows)).abs() <= tolerance(starting) * 10.0);
        }
    }

    #[test]
    fn balances_never_go_negative(records in records_strategy(), extra in -50.0..500.0f64) {
        let schedule = simulate(records, extra);
        for period in &schedule.periods {
            for line in &period.lines {
                prop_assert!(line.starting >= 0.0);
                prop_assert!(line.after_interest >= 0.0);
                prop_assert!(line.after_interest + line.minimum_payment >= 0.0);
                prop_assert!(line.ending >= 0.0);
                prop_assert!(line.minimum_payment <= 0.0);
                prop_assert!(line.excess_payment <= 0.0);
            }
        }
    }

    #[test]
    fn excess_goes_to_highest_rate_first(records in records_strategy(), extra in 0.0..500.0f64) {
        let schedule = simulate(records, extra);
        for period in &schedule.periods {
            let mut partial_seen = false;
            let mut open_before = false;
            for line in &period.lines {
                let received = line.excess_payment < 0.0;
                if received {
                    // A lower-rate debt only gets excess once everything above it is cleared.
                    prop_assert!(!partial_seen);
                    prop_assert!(!open_before);
                }
                if received && line.ending > 0.0 {
                    partial_seen = true;
                }
                if line.ending > 0.0 {
                    open_before = true;
                }
            }
            prop_assert!(period.unallocated >= 0.0);
            if period.unallocated > 0.0 {
                prop_assert!(period.lines.iter().all(|l| l.ending == 0.0));
            }
        }
    }

    #[test]
    fn payments_above_interest_terminate(
        raw in prop::collection::vec((1.0..5_000.0f64, 0.0..0.3f64, 10.0..50.0f64), 1..6),
        extra in 0.0..200.0f64,
    ) {
        // Each minimum beats the opening interest by a margin, so balances only fall.
        let records: Vec<DebtRecord> = raw
            .into_iter()
            .enumerate()
            .map(|(i, (amount, rate, margin))| {
                DebtRecord::new(format!("debt-{i}"), amount, rate, amount * rate / 12.0 + margin)
            })
            .collect();
        let schedule = simulate(records, extra);
        prop_assert!(schedule.is_paid_off());
        prop_assert!(schedule.payoff_periods().iter().all(Option::is_some));
        let last = schedule.periods.last().unwrap();
        prop_assert!(last.ending().all(|b| b == 0.0));
    }
}
