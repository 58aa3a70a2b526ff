// Proxy Pattern - protection proxy in front of a bank account
//
// The proxy borrows the real account for as long as one user's session
// lasts. Access denied and insufficient funds are outcomes, not errors.

use crate::messaging::Narrator;
use std::fmt;

/// Result of asking for the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceView {
    Balance(u64),
    AccessDenied,
}

/// Result of a withdrawal attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    Completed { new_balance: u64 },
    InsufficientFunds { balance: u64, requested: u64 },
    AccessDenied,
}

impl Withdrawal {
    pub fn is_completed(&self) -> bool {
        matches!(self, Withdrawal::Completed { .. })
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Withdrawal::Completed { new_balance } => write!(f, "completed (balance ${})", new_balance),
            Withdrawal::InsufficientFunds { .. } => f.write_str("insufficient funds"),
            Withdrawal::AccessDenied => f.write_str("access denied"),
        }
    }
}

/// Operations shared by the real account and its proxy
pub trait BankAccount {
    fn owner(&self) -> &str;

    fn view_balance(&self, narrator: &mut Narrator) -> BalanceView;

    fn withdraw(&mut self, amount: u64, narrator: &mut Narrator) -> Withdrawal;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealBankAccount {
    owner: String,
    balance: u64,
}

impl RealBankAccount {
    pub fn new(owner: impl Into<String>, balance: u64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }
}

impl BankAccount for RealBankAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn view_balance(&self, narrator: &mut Narrator) -> BalanceView {
        narrator.info(format!(
            "{}'s current balance is ${}",
            self.owner, self.balance
        ));
        BalanceView::Balance(self.balance)
    }

    fn withdraw(&mut self, amount: u64, narrator: &mut Narrator) -> Withdrawal {
        if amount <= self.balance {
            self.balance -= amount;
            narrator.info(format!(
                "${} withdrawn. New balance: ${}",
                amount, self.balance
            ));
            Withdrawal::Completed {
                new_balance: self.balance,
            }
        } else {
            narrator.warning("Insufficient funds.");
            Withdrawal::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            }
        }
    }
}

/// Forwards to the real account only when the current user owns it
pub struct BankAccountProxy<'a, A: BankAccount> {
    account: &'a mut A,
    current_user: String,
}

impl<'a, A: BankAccount> BankAccountProxy<'a, A> {
    pub fn new(account: &'a mut A, current_user: impl Into<String>) -> Self {
        Self {
            account,
            current_user: current_user.into(),
        }
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    fn is_authorized(&self) -> bool {
        self.current_user == self.account.owner()
    }

    fn deny(&self, action: &str, narrator: &mut Narrator) {
        tracing::debug!(user = %self.current_user, action, "access denied");
        narrator.warning("Access denied: unauthorized user.");
    }
}

impl<A: BankAccount> BankAccount for BankAccountProxy<'_, A> {
    fn owner(&self) -> &str {
        self.account.owner()
    }

    fn view_balance(&self, narrator: &mut Narrator) -> BalanceView {
        if !self.is_authorized() {
            self.deny("view_balance", narrator);
            return BalanceView::AccessDenied;
        }
        self.account.view_balance(narrator)
    }

    fn withdraw(&mut self, amount: u64, narrator: &mut Narrator) -> Withdrawal {
        if !self.is_authorized() {
            self.deny("withdraw", narrator);
            return Withdrawal::AccessDenied;
        }
        self.account.withdraw(amount, narrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::NotificationCategory;

    fn narrator() -> Narrator {
        Narrator::silent(NotificationCategory::Proxy)
    }

    #[test]
    fn test_owner_passes_through() {
        let mut account = RealBankAccount::new("Alice", 1000);
        let mut narrator = narrator();

        let mut proxy = BankAccountProxy::new(&mut account, "Alice");
        assert_eq!(proxy.view_balance(&mut narrator), BalanceView::Balance(1000));
        assert_eq!(
            proxy.withdraw(300, &mut narrator),
            Withdrawal::Completed { new_balance: 700 }
        );

        assert_eq!(account.balance(), 700);
        assert_eq!(
            narrator.messages(),
            vec![
                "Alice's current balance is $1000",
                "$300 withdrawn. New balance: $700",
            ]
        );
    }

    #[test]
    fn test_other_user_is_denied() {
        let mut account = RealBankAccount::new("Alice", 1000);
        let mut narrator = narrator();

        let mut proxy = BankAccountProxy::new(&mut account, "Bob");
        assert_eq!(proxy.view_balance(&mut narrator), BalanceView::AccessDenied);
        assert_eq!(proxy.withdraw(200, &mut narrator), Withdrawal::AccessDenied);

        assert_eq!(account.balance(), 1000);
        assert_eq!(narrator.problem_count(), 2);
        assert_eq!(
            narrator.last_message(),
            Some("Access denied: unauthorized user.")
        );
    }

    #[test]
    fn test_overdraw_is_rejected_and_account_stays_usable() {
        let mut account = RealBankAccount::new("Alice", 100);
        let mut narrator = narrator();

        let mut proxy = BankAccountProxy::new(&mut account, "Alice");
        assert_eq!(
            proxy.withdraw(500, &mut narrator),
            Withdrawal::InsufficientFunds {
                balance: 100,
                requested: 500
            }
        );
        assert!(proxy.withdraw(100, &mut narrator).is_completed());
        assert_eq!(account.balance(), 0);
    }
}
