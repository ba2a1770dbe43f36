use yew::prelude::*;

use crate::components::visibility::{use_in_view, InViewOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub step: u8,
    pub date: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
}

pub const ROADMAP: [Milestone; 5] = [
    Milestone {
        step: 1,
        date: "NOW",
        title: "AGREEMENT",
        subtitle: "Architectural interface.",
        background: "#18181b",
    },
    Milestone {
        step: 2,
        date: "MAR 1",
        title: "PROTOCOL ASSESSMENT",
        subtitle: "Infrastructure install.",
        background: "#6b5a7e",
    },
    Milestone {
        step: 3,
        date: "APR 1",
        title: "WELLNESS INSTALL",
        subtitle: "Core logic ingest.",
        background: "#6a9a3f",
    },
    Milestone {
        step: 4,
        date: "MAY 1",
        title: "ACCESS BEGINS",
        subtitle: "Executive residence.",
        background: "#878d9f",
    },
    Milestone {
        step: 5,
        date: "SEPT",
        title: "FULL AUTONOMY",
        subtitle: "Zero human intervention.",
        background: "#3b2a4a",
    },
];

const ROADMAP_VIEW: InViewOptions = InViewOptions {
    threshold: 0.1,
    once: true,
};

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ROADMAP_VIEW);

    html! {
        <section id="timeline" ref={node} class={classes!("roadmap", in_view.then_some("in-view"))}>
            <style>
                {r#"
                    .roadmap { max-width: 80rem; margin: 0 auto 5rem; padding: 3rem; background: #fff; color: #18181b; }
                    .roadmap-header {
                        display: flex;
                        align-items: flex-end;
                        gap: 3rem;
                        border-bottom: 1px solid #f4f4f5;
                        padding-bottom: 2rem;
                        margin-bottom: 3rem;
                    }
                    .roadmap-header h2 { font-size: 3.75rem; font-weight: 700; color: #6a9a3f; margin: 0; line-height: 1; }
                    .roadmap-header p { margin-left: auto; max-width: 42rem; border-left: 4px solid rgba(24,24,27,0.2); padding-left: 1.5rem; }
                    .roadmap-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
                    .milestone {
                        aspect-ratio: 1;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        color: #fff;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        box-shadow: 0 30px 60px -10px rgba(0,0,0,0.3);
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.5s, transform 0.5s, box-shadow 0.3s;
                    }
                    .roadmap.in-view .milestone { opacity: 1; transform: none; }
                    .roadmap.in-view .milestone:hover { transform: translateY(-0.5rem); transition-delay: 0s; }
                    .milestone-step {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255,255,255,0.3);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    .milestone-date { font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; }
                    .milestone h3 { font-size: 1.5rem; font-weight: 900; line-height: 0.9; margin: 0.75rem 0 0.5rem; }
                    .milestone p { font-size: 10px; font-weight: 700; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.7; margin: 0; }
                    @media (max-width: 1024px) {
                        .roadmap { padding: 2rem 1rem; }
                        .roadmap-header { flex-direction: column; align-items: flex-start; }
                        .roadmap-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="roadmap-header">
                <div>
                    <span class="showcase-eyebrow">{"06 / DEPLOYMENT"}</span>
                    <h2>{"ROADMAP"}</h2>
                </div>
                <p>
                    {"From agreement to installation, then testing to full autonomy \
                      as Cybercab and Optimus deploy to the property."}
                </p>
            </div>
            <div class="roadmap-grid">
                { for ROADMAP.iter().enumerate().map(|(i, milestone)| html! {
                    <div
                        key={milestone.step}
                        class="milestone"
                        style={format!("background: {}; transition-delay: {:.1}s;", milestone.background, 0.1 * i as f64)}
                    >
                        <div class="milestone-step">{milestone.step}</div>
                        <div>
                            <span class="milestone-date">{milestone.date}</span>
                            <h3>{milestone.title}</h3>
                            <p>{milestone.subtitle}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, milestone) in ROADMAP.iter().enumerate() {
            assert_eq!(usize::from(milestone.step), i + 1);
        }
    }

    #[test]
    fn roadmap_ends_in_full_autonomy() {
        assert_eq!(ROADMAP[0].date, "NOW");
        assert_eq!(ROADMAP[4].title, "FULL AUTONOMY");
    }
}
