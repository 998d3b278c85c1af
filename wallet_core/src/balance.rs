//! Sweepable amount computation.

/// Lamports left behind on top of fee and rent, so wallet UIs that run their
/// own balance checks (0.001 SOL margin) still accept the transfer.
pub const SAFETY_BUFFER_LAMPORTS: u64 = 1_000_000;

/// Compute how much of `balance` can be swept.
///
/// `send = balance − fee − rent_exempt_minimum − buffer`
///
/// Returns `None` when the result would be zero or negative.
pub fn compute_send_amount(
    balance: u64,
    fee: u64,
    rent_exempt_minimum: u64,
    buffer: u64,
) -> Option<u64> {
    balance
        .checked_sub(fee)?
        .checked_sub(rent_exempt_minimum)?
        .checked_sub(buffer)
        .filter(|&amount| amount > 0)
}
