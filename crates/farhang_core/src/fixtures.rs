//! Built-in content used when nothing is persisted yet.
//!
//! The article set is the startup fallback for the persisted collection.

use crate::model::article::{Article, Category, Language};
use crate::model::event::{Event, EventLocation, EventType};
use crate::model::user::{Author, User};

#[allow(clippy::too_many_arguments)]
fn article(
    id: i64,
    title: &str,
    excerpt: &str,
    category: Category,
    author_id: i64,
    date: &str,
    image_height: u32,
    tags: &[&str],
) -> Article {
    Article {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: format!("{excerpt}\n\n{title}"),
        image_url: format!("https://picsum.photos/seed/farhang{id}/600/{image_height}"),
        image_height,
        category,
        date: date.to_string(),
        views: "۱.۲ هزار".to_string(),
        likes: "۲۴۰".to_string(),
        language: Language::Fa,
        author_id,
        video_url: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Default article collection, newest first.
pub fn mock_articles() -> Vec<Article> {
    vec![
        article(
            1,
            "شب‌های جاز تهران",
            "گزارشی از اجرای زنده گروه‌های جاز جوان در تالار وحدت",
            Category::Music,
            1,
            "2024-07-21",
            420,
            &["جاز", "موسیقی زنده"],
        ),
        article(
            2,
            "بازخوانی شاهنامه در قهوه‌خانه",
            "نقالی، هنری که هنوز در قهوه‌خانه‌های قدیمی نفس می‌کشد",
            Category::LocalCulture,
            2,
            "2024-07-18",
            360,
            &["نقالی", "شاهنامه"],
        ),
        article(
            3,
            "نگاهی به شعر نو",
            "از نیما تا امروز؛ مسیر شعر نو فارسی در یک قرن",
            Category::Literature,
            3,
            "2024-07-15",
            300,
            &["شعر", "نیما"],
        ),
        article(
            4,
            "عکاسی خیابانی در بازار",
            "روایت تصویری یک روز از زندگی در بازار بزرگ تبریز",
            Category::Photography,
            1,
            "2024-07-12",
            480,
            &["عکاسی", "بازار"],
        ),
        article(
            5,
            "صحنه‌ای برای نسل تازه",
            "تئاتر مستقل و کارگردانان جوانی که قواعد را جابه‌جا می‌کنند",
            Category::Theater,
            2,
            "2024-07-09",
            340,
            &["تئاتر مستقل"],
        ),
        article(
            6,
            "سه‌تار و سکوت",
            "گفت‌وگو با نوازنده‌ای که جاز و موسیقی دستگاهی را به هم پیوند می‌زند",
            Category::Music,
            3,
            "2024-07-05",
            400,
            &["جاز", "سه‌تار"],
        ),
    ]
}

/// Author profiles referenced by `Article::author_id`.
pub fn mock_authors() -> Vec<Author> {
    [
        (1, "سارا محمدی", "روزنامه‌نگار موسیقی و عکاس."),
        (2, "علی رضایی", "پژوهشگر فرهنگ عامه و منتقد تئاتر."),
        (3, "مریم احمدی", "شاعر و مترجم ادبیات معاصر."),
    ]
    .into_iter()
    .map(|(id, name, bio)| Author {
        id,
        name: name.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?u=farhang{id}"),
        bio: bio.to_string(),
    })
    .collect()
}

/// Users for the simulated sign-in cycle.
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: 101,
            name: "کاربر مهمان".to_string(),
            is_author: false,
            author_id: None,
        },
        User {
            id: 102,
            name: "سارا محمدی".to_string(),
            is_author: true,
            author_id: Some(1),
        },
    ]
}

/// Upcoming event listing.
pub fn mock_events() -> Vec<Event> {
    [
        (1, "کنسرت ارکستر ملی", EventType::Concert, "2024-08-15", "۲۰:۰۰", "تالار وحدت"),
        (2, "نمایشگاه عکس «شهر»", EventType::Exhibition, "2024-08-18", "۱۶:۰۰", "خانه هنرمندان"),
        (3, "نمایش «باغ آلبالو»", EventType::Theater, "2024-08-20", "۱۹:۳۰", "تئاتر شهر"),
        (4, "شب موسیقی محلی", EventType::Concert, "2024-08-25", "۲۱:۰۰", "فرهنگسرای نیاوران"),
    ]
    .into_iter()
    .map(|(id, title, event_type, date, time, venue)| Event {
        id,
        title: title.to_string(),
        event_type,
        date: date.to_string(),
        time: time.to_string(),
        location: EventLocation {
            name: venue.to_string(),
            map_url: format!("https://maps.example.com/?q={id}"),
        },
        image_url: format!("https://picsum.photos/seed/event{id}/600/400"),
        description: format!("{title} در {venue}"),
        ticket_url: format!("https://tickets.example.com/events/{id}"),
    })
    .collect()
}
