//! Payment reconciliation.
//!
//! Compares what a stay costs with what the guest has paid. Overpayment
//! is a normal transient state: shortening a stay after payment leaves
//! `paid > total`, which is flagged as a refund due rather than blocked.
//! Recording the refund as a ledger transaction is left to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Reservation;

/// Where a reservation stands financially.
///
/// At most one of `balance_due` and `refund_due` is positive; both are
/// zero exactly when the stay is settled.
///
/// # Example
///
/// ```
/// use booking_engine::calendar::reconcile_payment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let position = reconcile_payment(
///     Decimal::from_str("114.00").unwrap(),
///     Decimal::from_str("150.00").unwrap(),
/// );
/// assert!(position.overpaid());
/// assert_eq!(position.refund_due, Decimal::from_str("36.00").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPosition {
    /// Amount still owed by the guest; zero when fully paid.
    pub balance_due: Decimal,
    /// Amount owed back to the guest after an overpayment; zero normally.
    pub refund_due: Decimal,
}

impl PaymentPosition {
    /// Whether the guest has paid more than the stay costs.
    pub fn overpaid(&self) -> bool {
        self.refund_due > Decimal::ZERO
    }

    /// Whether the stay is fully paid with nothing owed either way.
    pub fn settled(&self) -> bool {
        self.balance_due.is_zero() && self.refund_due.is_zero()
    }
}

/// Reconciles an amount paid against a stay total.
///
/// Both outputs are non-negative and rounded to two decimals, and
/// `paid + balance_due - refund_due == total` always holds.
pub fn reconcile_payment(total: Decimal, paid: Decimal) -> PaymentPosition {
    let difference = (total - paid).round_dp(2);
    if difference >= Decimal::ZERO {
        PaymentPosition {
            balance_due: difference,
            refund_due: Decimal::ZERO,
        }
    } else {
        PaymentPosition {
            balance_due: Decimal::ZERO,
            refund_due: -difference,
        }
    }
}

/// Reconciles a reservation's own total and paid amounts.
pub fn reservation_position(reservation: &Reservation) -> PaymentPosition {
    reconcile_payment(reservation.total_amount, reservation.paid_amount)
}
