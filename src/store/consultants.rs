//! In-memory consultant roster. This is the mock dataset the console
//! operates on; in a deployed build it would come from the staffing API.

use crate::models::clock::ClockTime;
use crate::models::consultant::Consultant;
use crate::models::interval::{BreakSet, Interval};

fn t(s: &str) -> ClockTime {
    ClockTime::parse(s).expect("static roster time")
}

fn iv(start: &str, end: &str) -> Interval {
    Interval::new(t(start), t(end))
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    email: &str,
    department: &str,
    title: &str,
    work: (&str, &str),
    breaks: Option<&[(&str, &str)]>,
    lunch: Option<(&str, &str)>,
    present: bool,
) -> Consultant {
    Consultant {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        title: title.to_string(),
        work_hours: iv(work.0, work.1),
        breaks: match breaks {
            Some(times) => BreakSet::new(true, times.iter().map(|(s, e)| iv(s, e)).collect()),
            None => BreakSet::disabled(),
        },
        lunch: lunch.map(|(s, e)| iv(s, e)),
        present,
    }
}

/// The full roster, in display order. Date-independent mock state.
pub fn roster() -> Vec<Consultant> {
    vec![
        entry(
            "c001",
            "김상담",
            "kim@happytalk.io",
            "고객지원팀",
            "주임 상담사",
            ("09:00", "18:00"),
            Some(&[("10:30", "10:45"), ("15:30", "15:45")]),
            Some(("12:00", "13:00")),
            true,
        ),
        entry(
            "c002",
            "이해피",
            "lee@happytalk.io",
            "고객지원팀",
            "선임 상담사",
            ("10:00", "19:00"),
            Some(&[("11:30", "11:45"), ("16:30", "16:45")]),
            Some(("13:00", "14:00")),
            true,
        ),
        entry(
            "c003",
            "박토크",
            "park@happytalk.io",
            "마케팅팀",
            "상담사",
            ("09:00", "18:00"),
            Some(&[("10:30", "10:45"), ("15:30", "15:45")]),
            Some(("12:30", "13:30")),
            false,
        ),
        entry(
            "c004",
            "정소통",
            "jung@happytalk.io",
            "마케팅팀",
            "상담사",
            ("08:30", "17:30"),
            Some(&[("10:00", "10:15"), ("15:00", "15:15")]),
            Some(("11:30", "12:30")),
            true,
        ),
        entry(
            "c005",
            "최서비스",
            "choi@happytalk.io",
            "기술지원팀",
            "상담사",
            ("09:00", "18:00"),
            Some(&[("10:30", "10:45"), ("15:30", "15:45")]),
            Some(("12:00", "13:00")),
            true,
        ),
        entry(
            "c006",
            "강진행",
            "kang@happytalk.io",
            "기술지원팀",
            "선임 상담사",
            ("09:30", "18:30"),
            Some(&[("11:00", "11:15"), ("16:00", "16:15")]),
            Some(("12:30", "13:30")),
            true,
        ),
        entry(
            "c007",
            "윤채팅",
            "yoon@happytalk.io",
            "고객지원팀",
            "상담사",
            ("08:00", "17:00"),
            Some(&[("09:30", "09:45"), ("14:30", "14:45")]),
            Some(("11:30", "12:30")),
            true,
        ),
        entry(
            "c008",
            "조상담",
            "jo@happytalk.io",
            "마케팅팀",
            "책임 상담사",
            ("09:00", "18:00"),
            None,
            Some(("12:00", "13:00")),
            false,
        ),
        entry(
            "c009",
            "한지원",
            "han@happytalk.io",
            "고객지원팀",
            "상담사",
            ("10:30", "19:30"),
            Some(&[("12:00", "12:15"), ("17:00", "17:15")]),
            Some(("14:00", "15:00")),
            true,
        ),
        entry(
            "c010",
            "배도움",
            "bae@happytalk.io",
            "기술지원팀",
            "상담사",
            ("09:00", "18:00"),
            Some(&[("10:30", "10:45")]),
            Some(("12:30", "13:30")),
            true,
        ),
        entry(
            "c011",
            "홍고객",
            "hong@happytalk.io",
            "마케팅팀",
            "상담사",
            ("08:30", "17:30"),
            Some(&[("10:00", "10:15"), ("15:00", "15:15")]),
            None,
            true,
        ),
        entry(
            "c012",
            "이메일",
            "email@happytalk.io",
            "고객지원팀",
            "책임 상담사",
            ("09:00", "18:00"),
            Some(&[("11:00", "11:15"), ("15:30", "15:45")]),
            Some(("13:00", "14:00")),
            false,
        ),
        entry(
            "c013",
            "신연결",
            "shin@happytalk.io",
            "기술지원팀",
            "선임 상담사",
            ("10:00", "19:00"),
            Some(&[("12:30", "12:45"), ("16:30", "16:45")]),
            Some(("14:00", "15:00")),
            true,
        ),
        entry(
            "c014",
            "주응대",
            "joo@happytalk.io",
            "고객지원팀",
            "상담사",
            ("08:00", "17:00"),
            None,
            Some(("12:00", "13:00")),
            true,
        ),
        entry(
            "c015",
            "김서포트",
            "support@happytalk.io",
            "마케팅팀",
            "상담사",
            ("09:00", "18:00"),
            Some(&[("10:30", "10:45"), ("15:30", "15:45")]),
            Some(("12:30", "13:30")),
            true,
        ),
    ]
}
