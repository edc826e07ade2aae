//! Skill configuration options.

/// Configuration options for the blackjack skill.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use alice_blackjack::SkillOptions;
///
/// let options = SkillOptions::default()
///     .with_hit_keyword("Hit")
///     .with_stand_keyword("Stand");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOptions {
    /// Utterance that makes the player draw a card.
    pub hit_keyword: String,
    /// Utterance that makes the dealer play the round out.
    pub stand_keyword: String,
    /// Key under `state.session` that holds the round snapshot.
    pub state_key: String,
    /// Whether a fresh round starts with the opening deal.
    pub deal_on_new_round: bool,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self {
            hit_keyword: String::from("Ещё"),
            stand_keyword: String::from("Хватит"),
            state_key: String::from("blackjack"),
            deal_on_new_round: true,
        }
    }
}

impl SkillOptions {
    /// Sets the hit keyword.
    ///
    /// # Example
    ///
    /// ```
    /// use alice_blackjack::SkillOptions;
    ///
    /// let options = SkillOptions::default().with_hit_keyword("Ещё карту");
    /// assert_eq!(options.hit_keyword, "Ещё карту");
    /// ```
    #[must_use]
    pub fn with_hit_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.hit_keyword = keyword.into();
        self
    }

    /// Sets the stand keyword.
    #[must_use]
    pub fn with_stand_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.stand_keyword = keyword.into();
        self
    }

    /// Sets the session state key holding the snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use alice_blackjack::SkillOptions;
    ///
    /// let options = SkillOptions::default().with_state_key("bj");
    /// assert_eq!(options.state_key, "bj");
    /// ```
    #[must_use]
    pub fn with_state_key(mut self, key: impl Into<String>) -> Self {
        self.state_key = key.into();
        self
    }

    /// Sets whether a fresh round starts with the opening deal.
    ///
    /// When disabled, a fresh round starts with both hands empty.
    #[must_use]
    pub fn with_deal_on_new_round(mut self, deal: bool) -> Self {
        self.deal_on_new_round = deal;
        self
    }
}
