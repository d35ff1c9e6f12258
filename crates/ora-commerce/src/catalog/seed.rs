//! Built-in catalog definitions.
//!
//! These are the collections the storefront ships with. Hosts can replace
//! any of them with a JSON file (see `CatalogSources` in the config).

use chrono::NaiveDate;

use crate::catalog::*;
use crate::ids::ItemId;
use crate::money::Money;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn artifacts() -> Vec<Artifact> {
    let artifact = |id: &str,
                    name: &str,
                    description: &str,
                    jewelry_type: JewelryType,
                    stones: &[Stone],
                    material: Material,
                    availability: Availability,
                    direction: MagicDirection,
                    price: i64| Artifact {
        id: ItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        jewelry_type,
        stones: stones.to_vec(),
        material,
        availability,
        direction,
        price: Money::rub(price),
        image: format!("/images/artifacts/{}.jpg", id),
    };

    vec![
        artifact(
            "a1",
            "Кольцо Древа Жизни",
            "Серебряное кольцо с гравировкой десяти сефирот.",
            JewelryType::Ring,
            &[Stone::Amethyst],
            Material::Silver,
            Availability::InStock,
            MagicDirection::Kabbalah,
            4_500,
        ),
        artifact(
            "a2",
            "Амулет Лунной Богини",
            "Бронзовый амулет с лунным камнем для ночных практик.",
            JewelryType::Amulet,
            &[Stone::Moonstone],
            Material::Bronze,
            Availability::InStock,
            MagicDirection::Astrology,
            3_200,
        ),
        artifact(
            "a3",
            "Кулон Уробороса",
            "Золотой кулон-змей, символ вечного возвращения.",
            JewelryType::Pendant,
            &[Stone::Garnet, Stone::Onyx],
            Material::Gold,
            Availability::Preorder,
            MagicDirection::Alchemy,
            18_900,
        ),
        artifact(
            "a4",
            "Рунический браслет",
            "Медный браслет с футарком старшего строя.",
            JewelryType::Bracelet,
            &[Stone::Obsidian],
            Material::Copper,
            Availability::InStock,
            MagicDirection::Runes,
            2_100,
        ),
        artifact(
            "a5",
            "Серьги Гермеса",
            "Серебряные серьги с лазуритом.",
            JewelryType::Earrings,
            &[Stone::Lapis],
            Material::Silver,
            Availability::SoldOut,
            MagicDirection::Hermetics,
            6_700,
        ),
        artifact(
            "a6",
            "Талисман Звезды Магов",
            "Золотой талисман с горным хрусталём и гранатом.",
            JewelryType::Talisman,
            &[Stone::Quartz, Stone::Garnet],
            Material::Gold,
            Availability::InStock,
            MagicDirection::Tarot,
            12_400,
        ),
        artifact(
            "a7",
            "Кольцо Малахитовой Змеи",
            "Бронзовое кольцо с малахитом.",
            JewelryType::Ring,
            &[Stone::Malachite],
            Material::Bronze,
            Availability::Preorder,
            MagicDirection::Alchemy,
            3_900,
        ),
    ]
}

pub fn courses() -> Vec<Course> {
    let course = |id: &str,
                  title: &str,
                  description: &str,
                  direction: MagicDirection,
                  level: Level,
                  format: CourseFormat,
                  teacher: &str,
                  price: i64,
                  starts_on: NaiveDate,
                  duration_weeks: u16| Course {
        id: ItemId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        direction,
        level,
        format,
        teacher_id: ItemId::new(teacher),
        price: Money::rub(price),
        starts_on,
        duration_weeks,
        image: format!("/images/courses/{}.jpg", id),
    };

    vec![
        course(
            "c1",
            "Сефиротическая космология",
            "Древо Жизни как карта мироздания и внутреннего пути.",
            MagicDirection::Kabbalah,
            Level::Intermediate,
            CourseFormat::Online,
            "t1",
            24_000,
            day(2026, 3, 1),
            8,
        ),
        course(
            "c2",
            "Натальная карта с нуля",
            "Построение и чтение гороскопа рождения.",
            MagicDirection::Astrology,
            Level::Beginner,
            CourseFormat::Online,
            "t2",
            12_000,
            day(2026, 2, 10),
            6,
        ),
        course(
            "c3",
            "Большие Арканы Таро",
            "Символика и практика работы со старшими арканами.",
            MagicDirection::Tarot,
            Level::Beginner,
            CourseFormat::Hybrid,
            "t3",
            9_500,
            day(2026, 4, 15),
            4,
        ),
        course(
            "c4",
            "Алхимическое Великое Делание",
            "Стадии нигредо, альбедо и рубедо в практике.",
            MagicDirection::Alchemy,
            Level::Advanced,
            CourseFormat::Offline,
            "t4",
            48_000,
            day(2026, 9, 1),
            12,
        ),
        course(
            "c5",
            "Руны старшего футарка",
            "Гадание, ставы и история рунического письма.",
            MagicDirection::Runes,
            Level::Beginner,
            CourseFormat::Online,
            "t5",
            7_900,
            day(2025, 11, 20),
            5,
        ),
        course(
            "c6",
            "Герметические принципы",
            "Семь принципов Кибалиона в повседневной практике.",
            MagicDirection::Hermetics,
            Level::Intermediate,
            CourseFormat::Hybrid,
            "t4",
            15_000,
            day(2026, 6, 5),
            6,
        ),
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    let post = |id: &str,
                title: &str,
                excerpt: &str,
                category: BlogCategory,
                tags: &[&str],
                author: &str,
                published_on: NaiveDate,
                read_minutes: u16| BlogPost {
        id: ItemId::new(id),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        body: excerpt.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: author.to_string(),
        published_on,
        read_minutes,
        image: format!("/images/blog/{}.jpg", id),
    };

    vec![
        post(
            "b1",
            "Как читать Древо Сефирот",
            "Путь от Малкут к Кетер шаг за шагом.",
            BlogCategory::Theory,
            &["каббала", "сефироты"],
            "Анна Лурье",
            day(2026, 10, 14),
            7,
        ),
        post(
            "b2",
            "Ретроградный Меркурий: мифы и факты",
            "Что на самом деле происходит трижды в год.",
            BlogCategory::Practice,
            &["астрология", "планеты"],
            "Илья Звездин",
            day(2026, 9, 28),
            5,
        ),
        post(
            "b3",
            "История колоды Райдера-Уэйта",
            "Как Памела Смит создала самую известную колоду.",
            BlogCategory::History,
            &["таро", "история"],
            "Мария Арканова",
            day(2026, 6, 2),
            9,
        ),
        post(
            "b4",
            "Открыт набор на осенний поток",
            "Старт курсов по алхимии и герметизму.",
            BlogCategory::News,
            &["новости"],
            "Редакция",
            day(2026, 10, 1),
            2,
        ),
        post(
            "b5",
            "Ежедневный расклад на одну карту",
            "Простая практика для начинающих тарологов.",
            BlogCategory::Practice,
            &["таро", "практика"],
            "Мария Арканова",
            day(2025, 12, 12),
            4,
        ),
    ]
}

pub fn library() -> Vec<LibraryItem> {
    let item = |id: &str,
                title: &str,
                author: &str,
                description: &str,
                format: LibraryFormat,
                direction: MagicDirection,
                access: Access,
                published_on: NaiveDate| LibraryItem {
        id: ItemId::new(id),
        title: title.to_string(),
        author: author.to_string(),
        description: description.to_string(),
        format,
        direction,
        access,
        published_on,
    };

    vec![
        item(
            "l1",
            "Сефер Йецира",
            "Неизвестный автор",
            "Книга Творения с комментариями.",
            LibraryFormat::Book,
            MagicDirection::Kabbalah,
            Access::Free,
            day(2024, 1, 10),
        ),
        item(
            "l2",
            "Изумрудная скрижаль",
            "Гермес Трисмегист",
            "Перевод и разбор текста.",
            LibraryFormat::Article,
            MagicDirection::Hermetics,
            Access::Free,
            day(2025, 5, 3),
        ),
        item(
            "l3",
            "Лекция: планетарные часы",
            "Илья Звездин",
            "Запись открытой лекции.",
            LibraryFormat::Video,
            MagicDirection::Astrology,
            Access::Premium,
            day(2026, 8, 21),
        ),
        item(
            "l4",
            "Медитация на руну Альгиз",
            "Ольга Северная",
            "Аудиопрактика защиты.",
            LibraryFormat::Audio,
            MagicDirection::Runes,
            Access::Premium,
            day(2026, 10, 2),
        ),
    ]
}

pub fn curriculum() -> Vec<CurriculumCourse> {
    let enrolled = |id: &str,
                    title: &str,
                    direction: MagicDirection,
                    level: Level,
                    lessons_total: u16,
                    lessons_completed: u16,
                    enrolled_on: NaiveDate| CurriculumCourse {
        id: ItemId::new(id),
        title: title.to_string(),
        direction,
        level,
        lessons_total,
        lessons_completed,
        enrolled_on,
    };

    vec![
        enrolled(
            "cc1",
            "Сефиротическая космология",
            MagicDirection::Kabbalah,
            Level::Intermediate,
            16,
            6,
            day(2026, 3, 1),
        ),
        enrolled(
            "cc2",
            "Большие Арканы Таро",
            MagicDirection::Tarot,
            Level::Beginner,
            8,
            8,
            day(2026, 4, 15),
        ),
        enrolled(
            "cc3",
            "Руны старшего футарка",
            MagicDirection::Runes,
            Level::Beginner,
            10,
            0,
            day(2026, 9, 30),
        ),
        enrolled(
            "cc4",
            "Натальная карта с нуля",
            MagicDirection::Astrology,
            Level::Beginner,
            12,
            9,
            day(2026, 2, 10),
        ),
    ]
}

pub fn teachers() -> Vec<Teacher> {
    let teacher = |id: &str,
                   name: &str,
                   bio: &str,
                   directions: &[MagicDirection],
                   experience_years: u8,
                   rating_tenths: u8| Teacher {
        id: ItemId::new(id),
        name: name.to_string(),
        bio: bio.to_string(),
        directions: directions.to_vec(),
        experience_years,
        rating_tenths,
        image: format!("/images/teachers/{}.jpg", id),
    };

    vec![
        teacher(
            "t1",
            "Анна Лурье",
            "Исследователь каббалистических текстов.",
            &[MagicDirection::Kabbalah, MagicDirection::Hermetics],
            15,
            49,
        ),
        teacher(
            "t2",
            "Илья Звездин",
            "Практикующий астролог.",
            &[MagicDirection::Astrology, MagicDirection::Numerology],
            11,
            47,
        ),
        teacher(
            "t3",
            "Мария Арканова",
            "Таролог и автор колоды.",
            &[MagicDirection::Tarot],
            9,
            48,
        ),
        teacher(
            "t4",
            "Виктор Меркурьев",
            "Историк алхимии и герметической традиции.",
            &[MagicDirection::Alchemy, MagicDirection::Hermetics],
            22,
            46,
        ),
        teacher(
            "t5",
            "Ольга Северная",
            "Руническая практика и скандинавская мифология.",
            &[MagicDirection::Runes],
            7,
            45,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        assert!(Catalog::new(artifacts()).is_ok());
        assert!(Catalog::new(courses()).is_ok());
        assert!(Catalog::new(blog_posts()).is_ok());
        assert!(Catalog::new(library()).is_ok());
        assert!(Catalog::new(curriculum()).is_ok());
        assert!(Catalog::new(teachers()).is_ok());
    }

    #[test]
    fn test_course_teachers_exist() {
        let teachers = Catalog::new(teachers()).unwrap();
        for course in courses() {
            assert!(
                teachers.contains(course.teacher_id.as_str()),
                "missing teacher {}",
                course.teacher_id
            );
        }
    }
}
