use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
}

/// Immutable descriptor for one book of the canon. The canonical `name` is
/// the stable key used by the progress map and the insight service; `zh_name`
/// is the localized display name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Book {
    pub name: &'static str,
    pub zh_name: &'static str,
    pub chapters: u32,
    pub testament: Testament,
    pub category: &'static str,
}

const fn book(
    name: &'static str,
    zh_name: &'static str,
    chapters: u32,
    testament: Testament,
    category: &'static str,
) -> Book {
    Book {
        name,
        zh_name,
        chapters,
        testament,
        category,
    }
}

use Testament::{New, Old};

static CANON: &[Book] = &[
    book("Genesis", "創世記", 50, Old, "Law"),
    book("Exodus", "出埃及記", 40, Old, "Law"),
    book("Leviticus", "利未記", 27, Old, "Law"),
    book("Numbers", "民數記", 36, Old, "Law"),
    book("Deuteronomy", "申命記", 34, Old, "Law"),
    book("Joshua", "約書亞記", 24, Old, "History"),
    book("Judges", "士師記", 21, Old, "History"),
    book("Ruth", "路得記", 4, Old, "History"),
    book("1 Samuel", "撒母耳記上", 31, Old, "History"),
    book("2 Samuel", "撒母耳記下", 24, Old, "History"),
    book("1 Kings", "列王紀上", 22, Old, "History"),
    book("2 Kings", "列王紀下", 25, Old, "History"),
    book("1 Chronicles", "歷代志上", 29, Old, "History"),
    book("2 Chronicles", "歷代志下", 36, Old, "History"),
    book("Ezra", "以斯拉記", 10, Old, "History"),
    book("Nehemiah", "尼希米記", 13, Old, "History"),
    book("Esther", "以斯帖記", 10, Old, "History"),
    book("Job", "約伯記", 42, Old, "Poetry & Wisdom"),
    book("Psalms", "詩篇", 150, Old, "Poetry & Wisdom"),
    book("Proverbs", "箴言", 31, Old, "Poetry & Wisdom"),
    book("Ecclesiastes", "傳道書", 12, Old, "Poetry & Wisdom"),
    book("Song of Songs", "雅歌", 8, Old, "Poetry & Wisdom"),
    book("Isaiah", "以賽亞書", 66, Old, "Major Prophets"),
    book("Jeremiah", "耶利米書", 52, Old, "Major Prophets"),
    book("Lamentations", "耶利米哀歌", 5, Old, "Major Prophets"),
    book("Ezekiel", "以西結書", 48, Old, "Major Prophets"),
    book("Daniel", "但以理書", 12, Old, "Major Prophets"),
    book("Hosea", "何西阿書", 14, Old, "Minor Prophets"),
    book("Joel", "約珥書", 3, Old, "Minor Prophets"),
    book("Amos", "阿摩司書", 9, Old, "Minor Prophets"),
    book("Obadiah", "俄巴底亞書", 1, Old, "Minor Prophets"),
    book("Jonah", "約拿書", 4, Old, "Minor Prophets"),
    book("Micah", "彌迦書", 7, Old, "Minor Prophets"),
    book("Nahum", "那鴻書", 3, Old, "Minor Prophets"),
    book("Habakkuk", "哈巴谷書", 3, Old, "Minor Prophets"),
    book("Zephaniah", "西番雅書", 3, Old, "Minor Prophets"),
    book("Haggai", "哈該書", 2, Old, "Minor Prophets"),
    book("Zechariah", "撒迦利亞書", 14, Old, "Minor Prophets"),
    book("Malachi", "瑪拉基書", 4, Old, "Minor Prophets"),
    book("Matthew", "馬太福音", 28, New, "Gospels"),
    book("Mark", "馬可福音", 16, New, "Gospels"),
    book("Luke", "路加福音", 24, New, "Gospels"),
    book("John", "約翰福音", 21, New, "Gospels"),
    book("Acts", "使徒行傳", 28, New, "Church History"),
    book("Romans", "羅馬書", 16, New, "Pauline Epistles"),
    book("1 Corinthians", "哥林多前書", 16, New, "Pauline Epistles"),
    book("2 Corinthians", "哥林多後書", 13, New, "Pauline Epistles"),
    book("Galatians", "加拉太書", 6, New, "Pauline Epistles"),
    book("Ephesians", "以弗所書", 6, New, "Pauline Epistles"),
    book("Philippians", "腓立比書", 4, New, "Pauline Epistles"),
    book("Colossians", "歌羅西書", 4, New, "Pauline Epistles"),
    book("1 Thessalonians", "帖撒羅尼迦前書", 5, New, "Pauline Epistles"),
    book("2 Thessalonians", "帖撒羅尼迦後書", 3, New, "Pauline Epistles"),
    book("1 Timothy", "提摩太前書", 6, New, "Pauline Epistles"),
    book("2 Timothy", "提摩太後書", 4, New, "Pauline Epistles"),
    book("Titus", "提多書", 3, New, "Pauline Epistles"),
    book("Philemon", "腓利門書", 1, New, "Pauline Epistles"),
    book("Hebrews", "希伯來書", 13, New, "General Epistles"),
    book("James", "雅各書", 5, New, "General Epistles"),
    book("1 Peter", "彼得前書", 5, New, "General Epistles"),
    book("2 Peter", "彼得後書", 3, New, "General Epistles"),
    book("1 John", "約翰一書", 5, New, "General Epistles"),
    book("2 John", "約翰二書", 1, New, "General Epistles"),
    book("3 John", "約翰三書", 1, New, "General Epistles"),
    book("Jude", "猶大書", 1, New, "General Epistles"),
    book("Revelation", "啟示錄", 22, New, "Apocalyptic"),
];

pub fn all() -> &'static [Book] {
    CANON
}

/// Look up a book by canonical name (case-insensitive) or localized name.
pub fn find(name: &str) -> Option<&'static Book> {
    let trimmed = name.trim();
    CANON
        .iter()
        .find(|book| book.name.eq_ignore_ascii_case(trimmed) || book.zh_name == trimmed)
}
