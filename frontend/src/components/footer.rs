use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::ContactDetails;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact: ContactDetails,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="nav-logo">{"brightpixel"}</span>
                    <p>{&props.contact.address}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="footer-link">{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::DigitalMarketing} classes="footer-link">{"Services"}</Link<Route>>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} brightpixel. All rights reserved.", year)}</p>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 2rem 2rem;
                    border-top: 1px solid rgba(79, 124, 255, 0.12);
                    color: #7d8296;
                }
                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 2rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-link {
                    color: #b8bcc8;
                    text-decoration: none;
                }
                .footer-copy {
                    text-align: center;
                    margin-top: 2rem;
                    font-size: 0.85rem;
                }
                "#}
            </style>
        </footer>
    }
}
