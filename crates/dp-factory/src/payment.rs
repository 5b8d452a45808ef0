//! Payment-processor product family (translates the `PaymentProcessor`
//! factory-method example of the C++ catalogue).
//!
//! Fee rates and per-method amount limits follow the catalogue: credit cards
//! charge 2.9 % up to 10 000, PayPal charges 3.4 % up to 50 000.

use dp_core::{errors::Result, Error, Real};

/// A way of paying, carrying the account detail it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// A credit card, identified by its number.
    CreditCard {
        /// The full card number; receipts show only the last four digits.
        card_number: String,
    },
    /// A PayPal account.
    PayPal {
        /// The account e-mail address.
        email: String,
    },
}

impl PaymentMethod {
    /// The processor's display name.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard { .. } => "Credit Card",
            PaymentMethod::PayPal { .. } => "PayPal",
        }
    }

    /// The transaction fee for `amount`.
    pub fn fee(&self, amount: Real) -> Real {
        match self {
            PaymentMethod::CreditCard { .. } => amount * 0.029,
            PaymentMethod::PayPal { .. } => amount * 0.034,
        }
    }

    /// The largest amount this method accepts.
    pub fn limit(&self) -> Real {
        match self {
            PaymentMethod::CreditCard { .. } => 10_000.0,
            PaymentMethod::PayPal { .. } => 50_000.0,
        }
    }

    /// `true` if `amount` is positive and within the method's limit.
    pub fn validates(&self, amount: Real) -> bool {
        amount > 0.0 && amount <= self.limit()
    }

    /// Process a payment, returning a receipt line.
    ///
    /// Fails with `InvalidArgument` if the amount is non-positive or exceeds
    /// the method's limit.
    pub fn process(&self, amount: Real) -> Result<String> {
        if !self.validates(amount) {
            return Err(Error::InvalidArgument(format!(
                "invalid payment amount {amount} for {}",
                self.name()
            )));
        }
        let fee = self.fee(amount);
        let via = match self {
            PaymentMethod::CreditCard { card_number } => {
                // Last four characters, not bytes: identifiers are arbitrary
                // strings and a byte slice could split a multibyte character.
                let cut = card_number
                    .char_indices()
                    .rev()
                    .take(4)
                    .last()
                    .map_or(0, |(i, _)| i);
                format!("Credit Card ending in {}", &card_number[cut..])
            }
            PaymentMethod::PayPal { email } => format!("PayPal account: {email}"),
        };
        Ok(format!("Processed ${amount:.2} (fee: ${fee:.2}) via {via}"))
    }
}

/// Build a payment method from a string discriminator, the way the
/// catalogue's `getPaymentFactory` did.
///
/// `kind` is `"credit"` or `"paypal"`; `identifier` is the card number or
/// e-mail respectively. Anything else is an `InvalidArgument` error.
///
/// ```
/// use dp_factory::payment_method;
///
/// let method = payment_method("credit", "4111111111111111").unwrap();
/// assert_eq!(method.name(), "Credit Card");
/// assert!(payment_method("barter", "chickens").is_err());
/// ```
pub fn payment_method(kind: &str, identifier: &str) -> Result<PaymentMethod> {
    match kind {
        "credit" => Ok(PaymentMethod::CreditCard {
            card_number: identifier.to_string(),
        }),
        "paypal" => Ok(PaymentMethod::PayPal {
            email: identifier.to_string(),
        }),
        other => Err(Error::InvalidArgument(format!(
            "unknown payment type: {other}"
        ))),
    }
}
