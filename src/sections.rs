//! Markup for every section of the page. Each component is a pure function of
//! its props, so the whole tree renders the same in the browser and under the
//! server renderer used by the tests.

use yew::prelude::*;

use crate::content::{
    footer_text, Project, BIO_PARAGRAPHS, CERTIFICATIONS, CONTACT_LINKS, HERO_HEADLINE,
    HERO_SUMMARY, HERO_TAGLINE, INTERESTS, NAV_LINKS, OWNER_NAME, PROJECTS, RESUME_HREF,
};
use crate::presentation::{
    cursor_style, menu_button_label, menu_icon, mobile_menu_links, progress_bar_style,
};
use crate::theme::Theme;
use crate::view_state::ViewState;

const HEADING_FONT: &str = "font-family: Helvetica, sans-serif;";
const CONTAINER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8";

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub theme: Theme,
    pub menu_open: bool,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <nav class={classes!("fixed", "w-full", "z-50", palette.nav, "shadow-lg")}>
            <div class={CONTAINER}>
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <span class="text-xl font-bold" style={HEADING_FONT}>{OWNER_NAME}</span>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="hover:text-orange-500 transition-colors">{link.label}</a>
                        }) }
                        <a href={RESUME_HREF} class="flex items-center space-x-1 hover:text-orange-500 transition-colors">
                            <span aria-hidden="true">{"↓"}</span>
                            <span>{"Resume"}</span>
                        </a>
                        <button
                            type="button"
                            class="p-2 rounded-full hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                            aria-label={props.theme.toggle_label()}
                            aria-pressed={props.theme.pressed().to_string()}
                            onclick={props.on_toggle_theme.clone()}
                        >
                            <span aria-hidden="true">{props.theme.icon()}</span>
                        </button>
                    </div>

                    <div class="md:hidden flex items-center space-x-4">
                        <button
                            type="button"
                            aria-label={props.theme.toggle_label()}
                            aria-pressed={props.theme.pressed().to_string()}
                            onclick={props.on_toggle_theme.clone()}
                        >
                            <span aria-hidden="true">{props.theme.icon()}</span>
                        </button>
                        <button
                            type="button"
                            aria-label={menu_button_label(props.menu_open)}
                            aria-expanded={props.menu_open.to_string()}
                            aria-controls="mobile-menu"
                            onclick={props.on_toggle_menu.clone()}
                        >
                            <span aria-hidden="true">{menu_icon(props.menu_open)}</span>
                        </button>
                    </div>
                </div>
            </div>

            if let Some(links) = mobile_menu_links(props.menu_open) {
                <div id="mobile-menu" class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        { for links.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="block px-3 py-2 hover:text-orange-500 transition-colors">{link.label}</a>
                        }) }
                        <a href={RESUME_HREF} class="block px-3 py-2 hover:text-orange-500 transition-colors">{"Resume"}</a>
                    </div>
                </div>
            }
        </nav>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="min-h-screen flex items-center justify-center pt-16">
            <div class={classes!(CONTAINER, "text-center")}>
                <h1 class="text-5xl md:text-7xl font-bold mb-6" style={HEADING_FONT}>{HERO_HEADLINE}</h1>
                <p class="text-xl md:text-2xl mb-8 text-orange-500">{HERO_TAGLINE}</p>
                <p class="text-lg md:text-xl max-w-2xl mx-auto">{HERO_SUMMARY}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemedProps {
    pub theme: Theme,
}

#[function_component(About)]
pub fn about(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="about" class="py-20" aria-labelledby="about-heading">
            <div class={CONTAINER}>
                <h2 id="about-heading" class="text-4xl font-bold mb-12 text-center" style={HEADING_FONT}>{"About Me"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        { for BIO_PARAGRAPHS.iter().map(|paragraph| html! {
                            <p class="text-lg">{*paragraph}</p>
                        }) }
                    </div>
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold mb-4">{"Areas of Interest"}</h3>
                        <div class="grid grid-cols-2 gap-4">
                            { for INTERESTS.iter().map(|interest| html! {
                                <div
                                    key={*interest}
                                    class={classes!("p-4", "rounded-lg", palette.tile, "shadow-lg", "transform", "hover:scale-105", "transition-transform")}
                                >
                                    {*interest}
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub theme: Theme,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let palette = props.theme.palette();
    let project = props.project;

    html! {
        <article class={classes!("rounded-lg", "overflow-hidden", "shadow-lg", "transform", "hover:scale-105", "transition-all", palette.card)}>
            if let Some(image) = project.image {
                <img src={image} alt={project.title} class="w-full h-48 object-cover" loading="lazy" />
            }
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class={classes!("mb-4", palette.muted_text)}>{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={*tag} class={classes!("px-3", "py-1", "rounded-full", "text-sm", palette.tag)}>{*tag}</span>
                    }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="projects" class={classes!("py-20", palette.band)} aria-labelledby="projects-heading">
            <div class={CONTAINER}>
                <h2 id="projects-heading" class="text-4xl font-bold mb-12 text-center" style={HEADING_FONT}>{"Projects"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.title} project={project} theme={props.theme} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Certifications)]
pub fn certifications(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="certifications" class="py-20" aria-labelledby="certifications-heading">
            <div class={CONTAINER}>
                <h2 id="certifications-heading" class="text-4xl font-bold mb-12 text-center" style={HEADING_FONT}>{"Certifications"}</h2>
                <ul class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for CERTIFICATIONS.iter().map(|certification| html! {
                        <li
                            key={*certification}
                            class={classes!("p-6", "rounded-lg", "shadow-lg", "transform", "hover:scale-105", "transition-all", palette.tile)}
                        >
                            <div class="flex items-center space-x-3">
                                <div class="w-2 h-2 bg-orange-500 rounded-full" aria-hidden="true" />
                                <span class="text-lg">{*certification}</span>
                            </div>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ThemedProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="contact" class={classes!("py-20", palette.band)} aria-labelledby="contact-heading">
            <div class={CONTAINER}>
                <h2 id="contact-heading" class="text-4xl font-bold mb-12 text-center" style={HEADING_FONT}>{"Let's Connect"}</h2>
                <div class="flex justify-center space-x-8">
                    { for CONTACT_LINKS.iter().map(|link| {
                        let new_tab = link.opens_new_tab();
                        html! {
                            <a
                                key={link.label}
                                href={link.href}
                                class="text-3xl transform hover:scale-110 transition-transform hover:text-orange-500"
                                aria-label={link.label}
                                target={new_tab.then_some("_blank")}
                                rel={new_tab.then_some("noopener noreferrer")}
                            >
                                <span aria-hidden="true">{link.icon()}</span>
                            </a>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: u32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="py-8">
            <div class={CONTAINER}>
                <p class="text-center">{footer_text(props.year)}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub state: ViewState,
    pub year: u32,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

/// The full page for one snapshot of view state.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let state = props.state;
    let theme = state.theme;

    html! {
        <div class={classes!("min-h-screen", "transition-colors", "duration-300", theme.palette().page)}>
            <div aria-hidden="true" style={cursor_style(state.pointer, state.scroll_progress)} />
            <div
                class="fixed top-0 left-0 h-1 z-50 bg-gradient-to-r from-orange-400 to-orange-600"
                role="progressbar"
                aria-label="Page scroll progress"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", state.scroll_progress.percent())}
                style={progress_bar_style(state.scroll_progress)}
            />

            <NavBar
                theme={theme}
                menu_open={state.menu_open}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_toggle_menu={props.on_toggle_menu.clone()}
            />

            <main>
                <Hero />
                <About theme={theme} />
                <Projects theme={theme} />
                <Certifications theme={theme} />
                <Contact theme={theme} />
            </main>

            <Footer year={props.year} />
        </div>
    }
}
