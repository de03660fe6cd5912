//! Fixed demonstration dataset.

use chrono::NaiveDate;
use entity::{Department, EmployeeDraft, Position};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn draft(
    first_name: &str,
    last_name: &str,
    email: &str,
    phone: &str,
    department: Department,
    position: Position,
    employed: NaiveDate,
    born: NaiveDate,
) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: Some(department),
        position: Some(position),
        date_of_employment: Some(employed),
        date_of_birth: Some(born),
    }
}

/// Twenty demonstration records, inserted through the normal add path.
pub(crate) fn demo_drafts() -> Vec<EmployeeDraft> {
    use Department::{Analytics, Tech};
    use Position::{Junior, Medior, Senior};

    vec![
        draft(
            "Fatih",
            "Solhan",
            "fatih.solhan@hotmail.com",
            "+90 555 555 55 55",
            Tech,
            Senior,
            date(2022, 9, 23),
            date(1998, 1, 29),
        ),
        draft(
            "Elif",
            "Kaya",
            "elif.kaya@example.com",
            "+90 533 234 56 78",
            Tech,
            Senior,
            date(2021, 5, 15),
            date(1988, 3, 12),
        ),
        draft(
            "Mehmet",
            "Demir",
            "mehmet.demir@example.com",
            "+90 534 345 67 89",
            Analytics,
            Medior,
            date(2022, 1, 10),
            date(1990, 7, 8),
        ),
        draft(
            "Ayşe",
            "Yılmaz",
            "ayse.yilmaz@example.com",
            "+90 535 456 78 90",
            Tech,
            Junior,
            date(2023, 3, 1),
            date(1995, 11, 20),
        ),
        draft(
            "Can",
            "Özkan",
            "can.ozkan@example.com",
            "+90 536 567 89 01",
            Analytics,
            Senior,
            date(2020, 8, 12),
            date(1987, 1, 15),
        ),
        draft(
            "Zeynep",
            "Arslan",
            "zeynep.arslan@example.com",
            "+90 537 678 90 12",
            Tech,
            Medior,
            date(2021, 11, 5),
            date(1991, 5, 30),
        ),
        draft(
            "Emre",
            "Koç",
            "emre.koc@example.com",
            "+90 538 789 01 23",
            Analytics,
            Junior,
            date(2023, 1, 20),
            date(1994, 9, 10),
        ),
        draft(
            "Seda",
            "Avcı",
            "seda.avci@example.com",
            "+90 539 890 12 34",
            Tech,
            Senior,
            date(2019, 12, 3),
            date(1986, 12, 25),
        ),
        draft(
            "Burak",
            "Şahin",
            "burak.sahin@example.com",
            "+90 540 901 23 45",
            Analytics,
            Medior,
            date(2022, 6, 18),
            date(1989, 4, 14),
        ),
        draft(
            "Gizem",
            "Çelik",
            "gizem.celik@example.com",
            "+90 541 012 34 56",
            Tech,
            Junior,
            date(2023, 4, 25),
            date(1996, 8, 7),
        ),
        draft(
            "Oğuz",
            "Karahan",
            "oguz.karahan@example.com",
            "+90 542 123 45 67",
            Analytics,
            Senior,
            date(2020, 2, 14),
            date(1985, 10, 28),
        ),
        draft(
            "Tuğba",
            "Polat",
            "tugba.polat@example.com",
            "+90 543 234 56 78",
            Tech,
            Medior,
            date(2021, 9, 30),
            date(1990, 6, 18),
        ),
        draft(
            "Serkan",
            "Güler",
            "serkan.guler@example.com",
            "+90 544 345 67 89",
            Analytics,
            Junior,
            date(2023, 2, 12),
            date(1993, 11, 5),
        ),
        draft(
            "İrem",
            "Başaran",
            "irem.basaran@example.com",
            "+90 545 456 78 90",
            Tech,
            Senior,
            date(2018, 7, 22),
            date(1984, 2, 14),
        ),
        draft(
            "Enes",
            "Yıldız",
            "enes.yildiz@example.com",
            "+90 546 567 89 01",
            Analytics,
            Medior,
            date(2022, 4, 8),
            date(1988, 9, 12),
        ),
        draft(
            "Merve",
            "Duran",
            "merve.duran@example.com",
            "+90 547 678 90 12",
            Tech,
            Junior,
            date(2023, 5, 15),
            date(1997, 1, 22),
        ),
        draft(
            "Murat",
            "Keskin",
            "murat.keskin@example.com",
            "+90 548 789 01 23",
            Analytics,
            Senior,
            date(2019, 10, 11),
            date(1983, 7, 3),
        ),
        draft(
            "Gül",
            "Öztürk",
            "gul.ozturk@example.com",
            "+90 549 890 12 34",
            Tech,
            Medior,
            date(2021, 12, 20),
            date(1989, 12, 8),
        ),
        draft(
            "Kerem",
            "Aydın",
            "kerem.aydin@example.com",
            "+90 550 901 23 45",
            Analytics,
            Junior,
            date(2023, 3, 18),
            date(1995, 5, 16),
        ),
        draft(
            "Buse",
            "Kılıç",
            "buse.kilic@example.com",
            "+90 551 012 34 56",
            Tech,
            Senior,
            date(2018, 11, 7),
            date(1982, 8, 29),
        ),
    ]
}
