use crate::models::entry::ScheduleEntry;
use crate::models::week::WeekKey;
use chrono::Datelike;

/// Weekday labels, Sunday first.
const DAYS_KOR: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

const RULE: &str = "--------------------------------------------";

/// Plain-text weekly schedule for one row, ready to paste into a chat.
///
/// ```text
/// [Staff A] Weekly Schedule
/// 2026년 1월 5일 ~ 2026년 1월 11
/// --------------------------------------------
/// • 월(1/5): 10:00AM – 3:00PM
/// ```
pub fn staff_message(entry: &ScheduleEntry, week: &WeekKey) -> String {
    let start = week.monday();
    let end = week.sunday();

    let mut msg = format!("[{}] Weekly Schedule\n", entry.staff_name);
    msg.push_str(&format!(
        "{}년 {}월 {}일 ~ {}년 {}월 {}\n",
        start.year(),
        start.month(),
        start.day(),
        end.year(),
        end.month(),
        end.day()
    ));
    msg.push_str(RULE);
    msg.push('\n');

    for (slot, date) in entry.days.iter().zip(week.day_dates()) {
        if let Some((from, to)) = slot.bounds() {
            let day = DAYS_KOR[date.weekday().num_days_from_sunday() as usize];
            msg.push_str(&format!(
                "• {}({}/{}): {} – {}\n",
                day,
                date.month(),
                date.day(),
                from,
                to
            ));
        }
    }

    msg
}
