//! Static copy for the main page: navigation, team, skills and contacts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// id of the main page section this item scrolls to
    pub anchor: &'static str,
    pub label: &'static str,
    pub highlighted: bool,
}

impl NavItem {
    /// Link that reaches the section from any page.
    pub fn href(&self) -> String {
        format!("/#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub major: &'static str,
    /// file name on the image host
    pub photo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    pub email: &'static str,
}

/// Element ids of the main page sections the navigation scrolls to.
pub mod section {
    pub const ABOUT: &str = "about";
    pub const MEMO: &str = "memo";
    pub const SKILLS: &str = "skills";
    pub const CONTACT: &str = "contact";

    /// Top to bottom, as the main page renders them.
    pub const ALL: &[&str] = &[ABOUT, MEMO, SKILLS, CONTACT];
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: section::ABOUT, label: "About", highlighted: false },
    NavItem { anchor: section::MEMO, label: "Memo", highlighted: true },
    NavItem { anchor: section::SKILLS, label: "Skills", highlighted: false },
    NavItem { anchor: section::CONTACT, label: "Contact", highlighted: false },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "하태영",
        role: "Backend 개발",
        major: "스마트IoT",
        photo: "image-5-1.png",
    },
    TeamMember {
        name: "이신우",
        role: "Frontend 개발",
        major: "스마트IoT",
        photo: "image-7@2x.png",
    },
];

pub const CONTACTS: &[Contact] = &[
    Contact { name: "하태영", email: "electro0218@gmail.com" },
    Contact { name: "이신우", email: "steven8602@naver.com" },
];

pub const FRONTEND_SKILLS: &[Skill] = &[
    Skill {
        name: "HTML5",
        logo: "/images/HTML5.png",
        description: "HTML5는 웹페이지의 구조를 정의하는 최신 마크업 언어로, 폼/미디어/인터랙션 향상 등 풍부한 웹 환경을 제공합니다.",
    },
    Skill {
        name: "CSS3",
        logo: "/images/CSS3.png",
        description: "CSS3는 웹페이지의 디자인을 담당하며 레이아웃·애니메이션 등 다채로운 시각 효과를 구현할 수 있습니다.",
    },
    Skill {
        name: "TailwindCSS",
        logo: "/images/tailwindcss.png",
        description: "TailwindCSS는 utility-first 기반의 모던 CSS 프레임워크로, 빠르게 반응형 UI 개발이 가능합니다.",
    },
    Skill {
        name: "React",
        logo: "/images/react.png",
        description: "React는 페이스북에서 제작한 빠르고 확장가능한 프론트엔드 UI 라이브러리입니다.",
    },
    Skill {
        name: "Node.js",
        logo: "/images/Node.js.png",
        description: "Node.js는 JavaScript 런타임 환경으로, 서버 개발에 널리 쓰이며 비동기 프로그래밍이 강점입니다.",
    },
    Skill {
        name: "Figma",
        logo: "/images/figma.png",
        description: "Figma는 협업 기반의 디자인 툴입니다. UI/UX 설계, 프로토타이핑, 팀 실시간 피드백에 최적화되어 있습니다.",
    },
    Skill {
        name: "Anima",
        logo: "/images/anima.png",
        description: "Anima는 디자인(피그마/스케치) → 실동작 코드 변환을 지원하는 프로토타이핑 툴입니다.",
    },
];

pub const BACKEND_SKILLS: &[Skill] = &[
    Skill {
        name: "Python",
        logo: "/images/python.jpeg",
        description: "Python은 간결한 문법과 강력한 라이브러리로 유명한 범용 프로그래밍 언어로, AI/데이터/백엔드에도 널리 쓰입니다.",
    },
    Skill {
        name: "FastAPI",
        logo: "/images/fastapi.png",
        description: "FastAPI는 직관적이고 빠른 비동기 REST API 서버 개발을 위한 Python 프레임워크입니다.",
    },
    Skill {
        name: "Google API",
        logo: "/images/googleapi.png",
        description: "Google API는 구글 서비스와 일정·인증 등 연동을 위한 다양한 개발용 API입니다.",
    },
    Skill {
        name: "Duckling",
        logo: "/images/duckling.png",
        description: "Duckling은 자연어에서 시간·수량 등 정보를 추출하는 NLP 툴입니다.",
    },
    Skill {
        name: "dateparser",
        logo: "/images/dateparser.png",
        description: "dateparser는 다양한 언어와 형식의 날짜 정보를 자동 해석해주는 라이브러리입니다.",
    },
    Skill {
        name: "Stanza",
        logo: "/images/stanza.png",
        description: "Stanza는 스탠포드대에서 만든 고성능 자연어처리(NLP) Python 패키지입니다.",
    },
    Skill {
        name: "Ubuntu",
        logo: "/images/ubuntu.png",
        description: "Ubuntu는 대표적인 리눅스 배포판으로 안정적인 서버 운영에 많이 쓰입니다.",
    },
    Skill {
        name: "AWS EC2",
        logo: "/images/awsec2.png",
        description: "AWS EC2는 클라우드 기반의 가상 서버로, 대용량 서비스, 쉬운 확장성까지 제공하는 인프라입니다.",
    },
];
