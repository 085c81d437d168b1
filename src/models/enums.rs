//! Enumerations with fixed wire names.
//!
//! Each enum maps both directions through one table; a string that matches
//! no variant fails to decode with an error naming the value.

use crate::codec::api_enum;

api_enum! {
    /// A bot category, as listed on koreanbots.
    ///
    /// The wire names are the Korean display names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use koreanbots::models::Category;
    ///
    /// let category: Category = "뮤직".parse().unwrap();
    /// assert_eq!(category, Category::Music);
    /// assert_eq!(Category::SlashCommand.to_string(), "슬래시 명령어");
    /// ```
    pub enum Category {
        /// 관리
        Moderation => "관리",
        /// 뮤직
        Music => "뮤직",
        /// 전적
        Stats => "전적",
        /// 게임
        Game => "게임",
        /// 도박
        Gambling => "도박",
        /// 로깅
        Logging => "로깅",
        /// 슬래시 명령어
        SlashCommand => "슬래시 명령어",
        /// 웹 대시보드
        WebDashboard => "웹 대시보드",
        /// 밈
        Meme => "밈",
        /// 레벨링
        Leveling => "레벨링",
        /// 유틸리티
        Utility => "유틸리티",
        /// 대화
        Talk => "대화",
        /// NSFW
        Nsfw => "NSFW",
        /// 검색
        Search => "검색",
        /// 학교
        School => "학교",
        /// 코로나19
        Covid => "코로나19",
        /// 번역
        Translate => "번역",
        /// 오버워치
        Overwatch => "오버워치",
        /// 리그 오브 레전드
        LeagueOfLegends => "리그 오브 레전드",
        /// 배틀그라운드
        BattleGround => "배틀그라운드",
        /// 마인크래프트
        Minecraft => "마인크래프트",
    }
}

api_enum! {
    /// The Discord presence of a bot.
    pub enum Status {
        /// Online.
        Online => "online",
        /// Idle.
        Idle => "idle",
        /// Do not disturb.
        DoNotDisturb => "dnd",
        /// Streaming.
        Streaming => "streaming",
        /// Offline.
        Offline => "offline",
    }
}

api_enum! {
    /// The moderation state of a bot on koreanbots.
    pub enum State {
        /// Listed normally.
        Ok => "ok",
        /// Suspended after a report.
        Reported => "reported",
        /// Forcibly removed.
        Blocked => "blocked",
        /// A special-purpose bot.
        Private => "private",
        /// Locked; no longer supported.
        Archived => "archived",
    }
}

impl State {
    /// Returns `true` if the bot is listed normally.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}
