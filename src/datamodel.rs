pub struct SeedAuthor {
    pub id: i32,
    pub name: &'static str,
}

pub struct SeedBook {
    pub id: &'static str,
    pub title: &'static str,
    pub author_id: i32,
}

pub static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor {
        id: 1,
        name: "Marijn Haverbeke",
    },
    SeedAuthor {
        id: 2,
        name: "Addy Osmani",
    },
    SeedAuthor {
        id: 3,
        name: "Axel Rauschmayer",
    },
];

pub static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: "9781593275846",
        title: "Eloquent JavaScript, Second Edition",
        author_id: 1,
    },
    SeedBook {
        id: "9781449331818",
        title: "Learning JavaScript Design Patterns",
        author_id: 2,
    },
    SeedBook {
        id: "9781449365035",
        title: "Speaking JavaScript",
        author_id: 3,
    },
    SeedBook {
        id: "9781491950296",
        title: "Programming JavaScript Applications",
        author_id: 1,
    },
    SeedBook {
        id: "9781593277574",
        title: "Understanding ECMAScript 6",
        author_id: 2,
    },
    SeedBook {
        id: "9781491904244",
        title: "You Don't Know JS",
        author_id: 3,
    },
    SeedBook {
        id: "9781449325862",
        title: "Git Pocket Guide",
        author_id: 2,
    },
    SeedBook {
        id: "9781449337711",
        title: "Designing Evolvable Web APIs with ASP.NET",
        author_id: 1,
    },
];
