use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::Asia::Shanghai;

/// Source of the market-open flag consulted after each market refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarketHours {
    /// Never reports the market as closed.
    #[default]
    AlwaysOpen,
    /// Shanghai/Shenzhen continuous sessions: weekdays 09:30-11:30 and 13:00-15:00
    /// Asia/Shanghai. Exchange holidays are not known.
    Shanghai,
}

impl MarketHours {
    /// Whether the market counts as open at `now`.
    pub fn is_open_at(self, now: DateTime<Utc>) -> bool {
        match self {
            Self::AlwaysOpen => true,
            Self::Shanghai => {
                let local = now.with_timezone(&Shanghai);
                if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
                    return false;
                }
                let t = local.time();
                SESSIONS
                    .iter()
                    .any(|&(open, close)| t >= hm(open) && t < hm(close))
            }
        }
    }
}

const SESSIONS: [((u32, u32), (u32, u32)); 2] = [((9, 30), (11, 30)), ((13, 0), (15, 0))];

fn hm((h, m): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}
