#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Courses", anchor: "#courses" },
    NavItem { label: "Community", anchor: "#community" },
    NavItem { label: "Hackathons", anchor: "#hackathons" },
    NavItem { label: "About", anchor: "#about" },
];

pub const HERO_WORDS: &[&str] = &[
    "Learn.",
    "Build.",
    "Make an Impact.",
    "Transform Lives.",
    "Shape the Future.",
];

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub number: f64,
    pub label: &'static str,
    pub icon: &'static str,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: 10000.0, label: "Student Developers", icon: "👥", suffix: "" },
    Stat { number: 50.0, label: "Free Workshops", icon: "💻", suffix: "" },
    Stat { number: 100.0, label: "Free Forever", icon: "❤️", suffix: "%" },
    Stat { number: 95.0, label: "Success Rate", icon: "🏆", suffix: "%" },
];

#[derive(Debug, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub image: &'static str,
    pub topics: &'static [&'static str],
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Web Development Fundamentals",
        description: "Master HTML, CSS, and JavaScript through hands-on projects",
        duration: "8 weeks",
        level: "Beginner",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=600",
        topics: &["HTML5", "CSS3", "JavaScript", "Git"],
    },
    Course {
        title: "Python Programming",
        description: "Learn Python from scratch with real-world applications",
        duration: "10 weeks",
        level: "Beginner",
        image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&q=80&w=600",
        topics: &["Python", "Data Structures", "APIs", "OOP"],
    },
    Course {
        title: "Full Stack Development",
        description: "Build complete web applications from front to back",
        duration: "12 weeks",
        level: "Intermediate",
        image: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?auto=format&fit=crop&q=80&w=600",
        topics: &["React", "Node.js", "MongoDB", "AWS"],
    },
];

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COMMUNITY_FEATURES: &[Feature] = &[
    Feature {
        icon: "💬",
        title: "24/7 Discord Community",
        description: "Get help anytime, anywhere from our active community of learners",
    },
    Feature {
        icon: "👥",
        title: "Peer Learning Groups",
        description: "Join study groups and practice with fellow students",
    },
    Feature {
        icon: "❤️",
        title: "Student Mentorship",
        description: "Learn from experienced student developers who've been in your shoes",
    },
];

#[derive(Debug, PartialEq)]
pub struct Hackathon {
    pub title: &'static str,
    pub date: &'static str,
    pub prize: &'static str,
    pub participants: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

pub const HACKATHONS: &[Hackathon] = &[
    Hackathon {
        title: "Summer Code Fest",
        date: "June 15-17, 2024",
        prize: "$5,000",
        participants: "500+",
        image: "https://images.unsplash.com/photo-1504384764586-bb4cdc1707b0?auto=format&fit=crop&q=80&w=600",
        tags: &["Open Source", "Innovation", "Web3"],
    },
    Hackathon {
        title: "AI Innovation Challenge",
        date: "July 22-24, 2024",
        prize: "$7,500",
        participants: "300+",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&q=80&w=600",
        tags: &["AI/ML", "Cloud", "Social Impact"],
    },
];
