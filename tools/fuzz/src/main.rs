use afl::fuzz;
use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use tariff_rules::{
    build_comparison, check_digits, classify_supply_voltage, format_fiscal_identifier,
    is_valid_fiscal_identifier, strip_fiscal_identifier, CostValue, FixedClock,
    MonthlyContractFigure, ValidityPeriodValidator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_cost(rng: &mut StdRng) -> CostValue {
    if rng.gen_bool(0.2) {
        CostValue::Unavailable
    } else {
        // stay far from Decimal's range, amounts are at most billions of cents
        CostValue::Available(Decimal::new(rng.gen_range(-1_000_000_000..1_000_000_000), 2))
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    // none of these may panic on arbitrary input
    let valid = is_valid_fiscal_identifier(Some(input));
    let formatted = format_fiscal_identifier(Some(input));
    assert!(formatted.chars().count() <= 18);
    let stripped = strip_fiscal_identifier(input);
    if valid {
        assert_eq!(stripped.len(), 14);
        assert_eq!(
            check_digits(&stripped[..12]).map(|(v1, v2)| format!("{v1}{v2}")),
            Some(stripped[12..].to_string())
        );
    }

    if let Ok(voltage) = input.trim().parse::<f64>() {
        classify_supply_voltage(Some(voltage));
    }

    let today = NaiveDate::from_num_days_from_ce_opt(rng.gen_range(1..1_000_000))
        .unwrap_or_default();
    let validator = ValidityPeriodValidator::with_clock(FixedClock::on(today));
    if let Ok(start) = validator.validate_start_date(input) {
        assert!(start <= validator.today());
    }
    let _ = validator.validate_end_date(input, input);

    let figures: Vec<MonthlyContractFigure> = (0..rng.gen_range(0..48))
        .map(|i| MonthlyContractFigure::new(format!("{i}"), gen_cost(&mut rng), gen_cost(&mut rng)))
        .collect();
    let comparison = build_comparison(&figures);
    assert_eq!(comparison.rows.len(), figures.len());
    assert_eq!(
        comparison.totals.difference,
        comparison.totals.recommended - comparison.totals.current
    );
}
