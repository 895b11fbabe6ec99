use rust_decimal::Decimal;

/// Notional NAV used when a request omits `initial_value` (100M VND).
pub const DEFAULT_INITIAL_VALUE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Lookback window used when a request omits `days`.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Longest accepted lookback window (about 100 years).
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Largest accepted NAV base (10^18).
pub const MAX_INITIAL_VALUE: Decimal = Decimal::from_parts(2_808_348_672, 232_830_643, 0, false, 0);

/// Benchmark index compared against when none is configured.
pub const DEFAULT_BENCHMARK_SYMBOL: &str = "VNINDEX";

/// Built-in default portfolio, served until one is saved.
pub const BUILTIN_DEFAULT_HOLDINGS: &[(&str, u32)] = &[("VNM", 30), ("VIC", 30), ("HPG", 40)];
