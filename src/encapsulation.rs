//! Pattern 3: Encapsulation
//!
//! The balance field is private to this module. The only ways to change it
//! are `deposit` and `withdraw`, and both validate before touching it.

use std::fmt;

use tracing::{debug, warn};

/// Outcome of a balance mutation. Rejections are values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposited { amount: i64, balance: i64 },
    Withdrew { amount: i64, balance: i64 },
    DepositRejected { amount: i64 },
    DepositOverflow { amount: i64 },
    WithdrawRejected { amount: i64 },
}

impl Transaction {
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Transaction::DepositRejected { .. }
                | Transaction::DepositOverflow { .. }
                | Transaction::WithdrawRejected { .. }
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::Deposited { amount, balance } => {
                write!(f, "Deposited {}. New Balance: {}", amount, balance)
            }
            Transaction::Withdrew { amount, balance } => {
                write!(f, "Withdrew {}. Remaining Balance: {}", amount, balance)
            }
            Transaction::DepositRejected { .. } => write!(f, "Deposit amount must be positive"),
            Transaction::DepositOverflow { .. } => write!(f, "Deposit amount exceeds account limit"),
            Transaction::WithdrawRejected { .. } => write!(f, "Invalid withdraw amount"),
        }
    }
}

#[derive(Debug)]
pub struct BankAccount {
    owner: String,
    balance: i64,
}

impl BankAccount {
    /// The opening balance is taken as given.
    pub fn new(owner: impl Into<String>, initial_balance: i64) -> Self {
        BankAccount {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    pub fn deposit(&mut self, amount: i64) -> Transaction {
        if amount <= 0 {
            warn!(owner = %self.owner, amount, "deposit rejected");
            return Transaction::DepositRejected { amount };
        }

        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                debug!(owner = %self.owner, amount, balance, "deposit applied");
                Transaction::Deposited { amount, balance }
            }
            None => {
                warn!(owner = %self.owner, amount, balance = self.balance, "deposit overflows balance");
                Transaction::DepositOverflow { amount }
            }
        }
    }

    pub fn withdraw(&mut self, amount: i64) -> Transaction {
        if amount > 0 && amount <= self.balance {
            self.balance -= amount;
            debug!(owner = %self.owner, amount, balance = self.balance, "withdrawal applied");
            Transaction::Withdrew {
                amount,
                balance: self.balance,
            }
        } else {
            warn!(owner = %self.owner, amount, balance = self.balance, "withdrawal rejected");
            Transaction::WithdrawRejected { amount }
        }
    }

    /// Read-only view of the balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}
