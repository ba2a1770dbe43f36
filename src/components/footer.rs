use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::nav::{section_link, NAV_LINKS};
use crate::config;

pub const CONTACT_SUBJECT: &str = "Micron House inquiry";
pub const PROPOSAL_VERSION: &str = "Proposal v1.2";

pub fn contact_href(subject: &str) -> String {
    format!("mailto:{}?subject={}", config::CONTACT_EMAIL, urlencoding::encode(subject))
}

fn copyright_line(year: i32) -> String {
    format!("© {} Proposal for Micron Technology", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #09090b;
                        color: #a1a1aa;
                        padding: 6rem 0;
                        border-top: 1px solid #27272a;
                    }
                    .footer-inner { max-width: 80rem; margin: 0 auto; padding: 0 3rem; }
                    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; margin-bottom: 5rem; }
                    .footer-brand h3 { font-size: 2.25rem; font-weight: 700; color: #fff; text-transform: uppercase; }
                    .footer-brand p { max-width: 28rem; font-size: 1.125rem; line-height: 1.6; color: #71717a; }
                    .footer-grid h4 {
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .footer-grid ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1rem; }
                    .footer-grid a { color: inherit; text-decoration: none; }
                    .footer-grid a:hover { color: #6a9a3f; }
                    .footer-version {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.375rem 1rem;
                        border: 1px solid rgba(255,255,255,0.2);
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255,255,255,0.05);
                        padding-top: 2.5rem;
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #52525b;
                    }
                    .footer-legal { display: flex; gap: 2rem; }
                    @media (max-width: 768px) {
                        .footer-inner { padding: 0 1rem; }
                        .footer-grid { grid-template-columns: 1fr; gap: 3rem; }
                        .footer-bottom { flex-direction: column; gap: 1.5rem; align-items: center; }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>{"Micron House"}</h3>
                        <p>
                            {"A convergence of historic stewardship and autonomous future. \
                              The first corporate residence designed for the era of artificial intelligence."}
                        </p>
                        <address>
                            {"1020 E Warm Springs Ave"}<br/>{"Boise, ID 83712"}
                        </address>
                    </div>
                    <div>
                        <h4>{"Explore"}</h4>
                        <ul>
                            { for NAV_LINKS.iter().map(|link| html! {
                                <li key={link.id}>
                                    <a href={format!("#{}", link.id)} onclick={section_link(link.id, None)}>
                                        {link.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li>
                                <a href={contact_href(CONTACT_SUBJECT)}>{config::CONTACT_EMAIL}</a>
                            </li>
                            <li>
                                <span class="footer-version">{PROPOSAL_VERSION}</span>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                    <div class="footer-legal">
                        <span>{"Privacy"}</span>
                        <span>{"Terms"}</span>
                        <span>{"Security"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_subject_is_url_encoded() {
        assert_eq!(
            contact_href(CONTACT_SUBJECT),
            "mailto:inquiry@micronhouse.com?subject=Micron%20House%20inquiry"
        );
    }

    #[test]
    fn copyright_uses_the_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 Proposal for Micron Technology");
    }
}
