use chrono::{ NaiveDate, NaiveDateTime };

#[derive(Clone, Debug, PartialEq)]
pub struct InvitationDetails {
    pub graduate: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub ceremony: NaiveDateTime,
    pub venue: &'static str,
    pub address: &'static str,
    pub map_url: &'static str,
    pub rsvp_note: &'static str,
}

impl InvitationDetails {
    pub fn ceremony_date_label(&self) -> String {
        self.ceremony.format("%d/%m/%Y").to_string()
    }

    pub fn ceremony_time_label(&self) -> String {
        self.ceremony.format("%H:%M").to_string()
    }
}

lazy_static::lazy_static! {
    pub static ref INVITATION: InvitationDetails = InvitationDetails {
        graduate: "Nguyễn Minh Anh",
        degree: "Cử nhân Khoa học Máy tính",
        school: "Trường Đại học Bách Khoa",
        ceremony: NaiveDate::from_ymd_opt(2026, 11, 21)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .unwrap_or_default(),
        venue: "Hội trường A, Cơ sở 1",
        address: "268 Lý Thường Kiệt, Quận 10, TP. Hồ Chí Minh",
        map_url: "https://maps.google.com/?q=268+Ly+Thuong+Kiet+Quan+10",
        rsvp_note: "Sự hiện diện của bạn là niềm vinh hạnh của mình!",
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Upcoming {
        days: i64,
        hours: i64,
        minutes: i64,
    },
    Started,
}

/// Time left until the ceremony, rounded down to the minute.
pub fn countdown(ceremony: NaiveDateTime, now: NaiveDateTime) -> Countdown {
    let remaining = ceremony.signed_duration_since(now);
    if remaining.num_seconds() <= 0 {
        return Countdown::Started;
    }
    let minutes_total = remaining.num_minutes();
    Countdown::Upcoming {
        days: minutes_total / (24 * 60),
        hours: (minutes_total / 60) % 24,
        minutes: minutes_total % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn counts_down_days_hours_minutes() {
        let ceremony = at(2026, 11, 21, 8, 30);
        assert_eq!(
            countdown(ceremony, at(2026, 11, 19, 6, 15)),
            Countdown::Upcoming { days: 2, hours: 2, minutes: 15 }
        );
    }

    #[test]
    fn started_at_and_after_ceremony() {
        let ceremony = at(2026, 11, 21, 8, 30);
        assert_eq!(countdown(ceremony, ceremony), Countdown::Started);
        assert_eq!(countdown(ceremony, at(2027, 1, 1, 0, 0)), Countdown::Started);
    }

    #[test]
    fn labels_use_vietnamese_date_order() {
        assert_eq!(INVITATION.ceremony_date_label(), "21/11/2026");
        assert_eq!(INVITATION.ceremony_time_label(), "08:30");
    }
}
