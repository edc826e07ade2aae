//! Round verdicts.

use core::fmt;

use crate::hand::BLACKJACK;

/// Outcome of a round given the dealer's and player's scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Dealer wins (dealer has 21, or player busts).
    DealerWin,
    /// Player wins (dealer busts, or player has 21).
    PlayerWin,
    /// Both hands bust.
    Draw,
    /// Nobody has won yet; the round goes on.
    Continue,
}

impl Verdict {
    /// Decides the verdict from the two scores.
    ///
    /// The checks run in a fixed order and the first match wins, so a dealer
    /// 21 beats a player 21.
    ///
    /// ```
    /// use alice_blackjack::Verdict;
    ///
    /// assert_eq!(Verdict::decide(21, 21), Verdict::DealerWin);
    /// assert_eq!(Verdict::decide(18, 18), Verdict::Continue);
    /// ```
    #[must_use]
    pub const fn decide(dealer: u8, player: u8) -> Self {
        if dealer > BLACKJACK && player > BLACKJACK {
            Self::Draw
        } else if dealer > BLACKJACK {
            Self::PlayerWin
        } else if dealer == BLACKJACK || player > BLACKJACK {
            Self::DealerWin
        } else if player == BLACKJACK {
            Self::PlayerWin
        } else {
            Self::Continue
        }
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Continue)
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DealerWin => "DEALER WIN",
            Self::PlayerWin => "PLAYER WIN",
            Self::Draw => "DRAW",
            Self::Continue => "CONTINUE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
