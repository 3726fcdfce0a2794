use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::components::nav_bar::NavBar;
use crate::components::skill_overlay::{SkillOverlay, dispatch};
use crate::config::{ScrollConfig, SiteLinks};
use crate::content::{BACKEND_SKILLS, CONTACTS, FRONTEND_SKILLS, Skill, TEAM, TeamMember, section};
use crate::routes::Page;
use crate::scroll::browser::scroll_to_hash_later;
use crate::state::{OverlayEvent, activates_tile};

#[component]
fn Hero() -> impl IntoView {
    let links = SiteLinks::from_context();

    view! {
        <section class="mb-40 pt-16">
            <h1 class="font-pretendard text-7xl font-bold mb-6 text-left">"Why Make platform?"</h1>
            <p class="font-pretendard text-xl text-gray-700 leading-relaxed whitespace-pre-line max-w-4xl mx-auto mb-10">
                "저희는 평소 떠오른 일정이나 약속을 간단히 메모만 해도,"<br/>
                "자동으로 날짜, 시간, 장소를 인식해 캘린더에 등록해주는 서비스를 만들었습니다."<br/>
                "바쁘고 정신없는 일상 속에서 매번 캘린더에 일정을 옮겨 적는 번거로움을 덜고,"<br/>
                "일정을 놓치지 않고 편하게 관리할 수 있도록 하기 위해 이 서비스를 기획하게 되었습니다."<br/>
                "반복적인 입력 없이도 생산성과 편의성을 높일 수 있다는 점에서,"<br/>
                "누구에게나 도움이 되는 솔루션이 될 것이라 믿습니다."
            </p>
            <img
                src=links.image("image-4.png")
                alt="대표 이미지"
                class="w-full max-h-[700px] object-cover rounded-2xl mx-auto shadow-lg"
            />
        </section>
    }
}

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    let links = SiteLinks::from_context();

    view! {
        <div class="w-96 bg-gray-50 rounded-2xl shadow-xl p-10 flex flex-col items-center">
            <img src=links.image(member.photo) alt=member.name class="w-56 h-56 rounded-full object-cover mb-6"/>
            <h3 class="font-pretendard text-3xl font-black mb-2">{member.name}</h3>
            <p class="font-pretendard text-xl text-gray-700 mb-3">{member.role}</p>
            <p class="font-pretendard text-gray-500 text-lg break-words">{member.major}</p>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id=section::ABOUT class="mb-40">
            <h2 class="font-pretendard text-5xl font-extrabold mb-14 text-left">"About us"</h2>
            <p class="font-pretendard text-xl text-gray-700 leading-relaxed max-w-4xl mx-auto mb-10 text-center">
                "일상을 자동화하는 일정관리 웹서비스 "<b>"PlanUP"</b>" 팀입니다."<br/>
                "반복적인 일정 등록의 번거로움을 줄이고, "<br/>
                "누구나 스마트하게 자신의 시간을 관리할 수 있도록 돕는 솔루션을 추구합니다."
            </p>
            <div class="flex gap-12 flex-wrap justify-center items-center text-center">
                {TEAM.iter().map(|member| view! { <MemberCard member=*member/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn MemoPitch() -> impl IntoView {
    let links = SiteLinks::from_context();

    view! {
        <section id=section::MEMO class="mb-40">
            <h2 class="font-pretendard text-5xl font-extrabold mb-14 text-left">"Memo"</h2>
            <div class="bg-blue-50 rounded-2xl shadow-xl p-12 flex flex-col items-center gap-8 text-center">
                <p class="font-pretendard text-xl text-gray-700 leading-relaxed max-w-3xl">
                    "\"내일 3시 강남역에서 팀 회의\"처럼 떠오른 일정을 그대로 적어 보세요."<br/>
                    "Plan Up이 날짜, 시간, 장소를 찾아 구글 캘린더에 등록해 드립니다."
                </p>
                <div class="flex flex-wrap gap-4 justify-center">
                    <a
                        href=links.service_home.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-8 py-4 rounded-full bg-blue-700 text-white text-xl font-bold hover:bg-blue-800 transition"
                    >"Plan Up 사용해보기"</a>
                    <a
                        href=links.service_home.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-8 py-4 rounded-full border border-gray-300 text-gray-700 text-xl hover:bg-gray-100 transition"
                    >"개인정보 처리방침 보기"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillTile(
    skill: Skill,
    selected: RwSignal<Option<Skill>>,
    #[prop(default = "h-28")] logo_height: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="flex flex-col items-center cursor-pointer hover:scale-105 transition-transform duration-300"
            tabindex="0"
            role="button"
            aria-label=format!("{} 상세", skill.name)
            on:click=move |_| dispatch(selected, OverlayEvent::Select(skill))
            on:keydown=move |ev| {
                if activates_tile(&ev.key()) {
                    ev.prevent_default();
                    dispatch(selected, OverlayEvent::Select(skill));
                }
            }
        >
            <img src=skill.logo alt=skill.name class=format!("{logo_height} object-contain mb-3")/>
            <span class="font-pretendard text-lg text-gray-600">{skill.name}</span>
        </div>
    }
}

#[component]
fn SkillGrid(
    title: &'static str,
    skills: &'static [Skill],
    selected: RwSignal<Option<Skill>>,
    logo_height: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-24 max-w-7xl mx-auto px-6 md:px-0">
            <h3 class="font-pretendard text-3xl font-semibold mb-12 text-left">{title}</h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-y-20 gap-x-20 justify-items-center items-center">
                <For
                    each=move || skills.iter().copied()
                    key=|skill| skill.name
                    children=move |skill| view! { <SkillTile skill selected logo_height/> }
                />
            </div>
        </div>
    }
}

#[component]
fn SkillsSection(selected: RwSignal<Option<Skill>>) -> impl IntoView {
    view! {
        <section id=section::SKILLS class="mb-40">
            <h2 class="font-pretendard text-5xl font-extrabold mb-16 tracking-tight text-left">"Skills"</h2>
            <SkillGrid title="Frontend" skills=FRONTEND_SKILLS selected logo_height="h-28"/>
            <SkillGrid title="Backend & Infra" skills=BACKEND_SKILLS selected logo_height="h-36"/>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id=section::CONTACT class="mb-40 max-w-3xl mx-auto">
            <h2 class="font-pretendard text-4xl font-semibold mb-8 text-left">"Contact"</h2>
            <div class="font-pretendard text-xl space-y-4 text-center">
                {CONTACTS
                    .iter()
                    .map(|c| view! { <p>{format!("{}: {}", c.name, c.email)}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn MainPage() -> impl IntoView {
    let cfg = ScrollConfig::from_context();
    let hash = use_location().hash;
    let selected: RwSignal<Option<Skill>> = RwSignal::new(None);

    // nothing is tracked, so this runs once after mount
    Effect::new(move |_| scroll_to_hash_later(&hash.get_untracked(), cfg));

    view! {
        <Title text=Page::Main.title()/>
        <div class="bg-white min-h-screen w-full">
            <NavBar/>
            <main class="pt-[calc(100px+1rem)] max-w-7xl mx-auto px-6">
                <Hero/>
                <AboutSection/>
                <MemoPitch/>
                <SkillsSection selected/>
                <ContactSection/>
                <SkillOverlay selected/>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    fn sections_html() -> String {
        Owner::new().with(|| {
            let selected = RwSignal::new(None);
            view! {
                <AboutSection/>
                <MemoPitch/>
                <SkillsSection selected/>
                <ContactSection/>
            }
            .to_html()
        })
    }

    #[test]
    fn sections_carry_nav_anchor_ids_in_order() {
        let html = sections_html();
        let mut last = 0;
        for id in section::ALL {
            let at = html
                .find(&format!("id=\"{id}\""))
                .unwrap_or_else(|| panic!("no section #{id}"));
            assert!(at >= last, "#{id} out of order");
            last = at;
        }
    }

    #[test]
    fn both_pitch_links_open_the_service() {
        let home = SiteLinks::default().service_home;
        let html = Owner::new().with(|| view! { <MemoPitch/> }.to_html());
        assert_eq!(html.matches(&format!("href=\"{home}\"")).count(), 2, "{html}");
    }

    #[test]
    fn every_skill_is_rendered_as_a_tile() {
        let html = sections_html();
        for skill in FRONTEND_SKILLS.iter().chain(BACKEND_SKILLS) {
            assert!(html.contains(&format!("src=\"{}\"", skill.logo)), "{}", skill.name);
        }
    }
}
