//! Bit-set flags attached to bots and users.
//!
//! The API sends flags as a plain integer. [`BotFlags`] and [`UserFlags`]
//! keep the raw bits, so unknown bits survive a round trip, and answer
//! membership queries for the known ones.

use serde::{Deserialize, Serialize};

macro_rules! flag_set {
    (
        $(#[$flag_meta:meta])*
        $flag:ident,
        $(#[$set_meta:meta])*
        $set:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $shift:literal,
            )+
        }
    ) => {
        $(#[$flag_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $flag {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $flag {
            /// Every known flag, in bit order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the bit this flag occupies.
            #[must_use]
            pub const fn bit(self) -> u32 {
                match self {
                    $(Self::$variant => 1 << $shift,)+
                }
            }
        }

        $(#[$set_meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $set(u32);

        impl $set {
            /// Wraps raw bits as received from the API.
            #[must_use]
            pub const fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            /// Returns the raw bits.
            #[must_use]
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Returns `true` if `flag` is set.
            #[must_use]
            pub const fn contains(self, flag: $flag) -> bool {
                self.0 & flag.bit() != 0
            }

            /// Returns `true` if no bit is set.
            #[must_use]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Iterates the known flags that are set.
            pub fn iter(self) -> impl Iterator<Item = $flag> {
                $flag::ALL.iter().copied().filter(move |flag| self.contains(*flag))
            }
        }

        impl From<$flag> for $set {
            fn from(flag: $flag) -> Self {
                Self(flag.bit())
            }
        }

        impl FromIterator<$flag> for $set {
            fn from_iter<I: IntoIterator<Item = $flag>>(iter: I) -> Self {
                Self(iter.into_iter().fold(0, |bits, flag| bits | flag.bit()))
            }
        }
    };
}

flag_set! {
    /// A single flag a bot may carry.
    BotFlag,
    /// The set of flags on a bot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use koreanbots::models::{BotFlag, BotFlags};
    ///
    /// let flags = BotFlags::from_bits(0b101);
    /// assert!(flags.contains(BotFlag::Official));
    /// assert!(flags.contains(BotFlag::KoreanbotsVerified));
    /// assert!(!flags.contains(BotFlag::Partner));
    /// ```
    BotFlags {
        /// Official bot.
        Official = 0,
        /// Verified by koreanbots.
        KoreanbotsVerified = 2,
        /// Partner bot.
        Partner = 3,
        /// Verified by Discord.
        DiscordVerified = 4,
        /// Premium.
        Premium = 5,
        /// Winner of the first koreanbots hackathon.
        FirstHackathonWinner = 6,
    }
}

flag_set! {
    /// A single flag a user may carry.
    UserFlag,
    /// The set of flags on a user.
    UserFlags {
        /// Site administrator.
        Admin = 0,
        /// Bug hunter.
        BugHunter = 1,
        /// Bot reviewer.
        BotReviewer = 2,
        /// Premium.
        Premium = 3,
    }
}
