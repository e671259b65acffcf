//! The subscription gate.
//!
//! A paid period runs from the last payment date for
//! `subscription_days` calendar days - adding days to a date, not
//! seconds to an instant, so the gate is insensitive to time-of-day and
//! DST. The expiry day itself still counts as active. An expired
//! subscription is an expected state, not an error.

use chrono::{Days, NaiveDate, Utc};

use crate::accounts::TenantAccount;

/// Last day of the paid period (inclusive).
pub fn expiry_date(account: &TenantAccount) -> NaiveDate {
    account
        .last_payment_date
        .checked_add_days(Days::new(u64::from(account.subscription_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether the subscription covers `today`.
///
/// The administrative flag always wins: a deactivated account is
/// inactive regardless of payment dates.
pub fn is_active_on(account: &TenantAccount, today: NaiveDate) -> bool {
    if !account.subscription_active {
        return false;
    }
    today <= expiry_date(account)
}

/// Whether the subscription covers the current date.
pub fn is_active(account: &TenantAccount) -> bool {
    is_active_on(account, Utc::now().date_naive())
}

/// Days until expiry as of `today`, floored at zero. Display value
/// ("Xj restants"); derived from the same expiry as the gate so the two
/// never disagree.
pub fn days_remaining_on(account: &TenantAccount, today: NaiveDate) -> i64 {
    (expiry_date(account) - today).num_days().max(0)
}

/// Days until expiry as of the current date, floored at zero.
pub fn days_remaining(account: &TenantAccount) -> i64 {
    days_remaining_on(account, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountStore, NewAccount};
    use salonkit_store::Storage;

    async fn account_paid_on(date: NaiveDate) -> TenantAccount {
        let store = AccountStore::new(Storage::in_memory());
        store
            .create(NewAccount {
                name: "Salon Test".into(),
                owner_name: "Awa".into(),
                phone: "+221770000000".into(),
                address: None,
                email: "owner@salon.test".into(),
                password: "pw1234".into(),
                last_payment_date: date,
            })
            .await
    }

    #[tokio::test]
    async fn active_through_the_expiry_day_inclusive() {
        let paid = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let account = account_paid_on(paid).await;

        let expiry = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(expiry_date(&account), expiry);

        assert!(is_active_on(&account, paid));
        assert!(is_active_on(&account, expiry));
        assert!(!is_active_on(&account, expiry.succ_opt().unwrap()));
    }

    #[tokio::test]
    async fn admin_override_beats_a_valid_period() {
        let paid = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut account = account_paid_on(paid).await;
        account.subscription_active = false;

        assert!(!is_active_on(&account, paid));
    }

    #[tokio::test]
    async fn days_remaining_never_goes_negative() {
        let paid = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let account = account_paid_on(paid).await;

        assert_eq!(
            days_remaining_on(&account, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            30
        );
        assert_eq!(
            days_remaining_on(&account, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()),
            0
        );
        assert_eq!(
            days_remaining_on(&account, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()),
            0
        );
    }
}
