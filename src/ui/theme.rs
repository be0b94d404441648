//! Landing page CSS

use gtk4::gdk::Display;
use gtk4::CssProvider;

const PAGE_CSS: &str = "
window {
    background-color: #f7f7f2;
}

.main-header {
    background-color: rgba(34, 40, 49, 0.95);
    color: #f7f7f2;
    padding: 12px 24px;
    transition: opacity 300ms ease-in-out;
}

.main-header.out {
    opacity: 0;
}

.main-header__title {
    font-size: 20px;
    font-weight: bold;
}

.main-nav__burger {
    min-width: 40px;
    min-height: 40px;
}

.main-nav__burger.cross {
    background-color: rgba(247, 247, 242, 0.2);
}

.main-nav__list button {
    color: #f7f7f2;
}

.section {
    padding: 48px 32px;
}

.section__title {
    font-size: 28px;
    font-weight: bold;
    margin-bottom: 24px;
}

.works-slide {
    background-color: #393e46;
    color: #f7f7f2;
    border-radius: 8px;
    min-height: 240px;
}

.works__text {
    font-size: 16px;
}

.works-pagination .bullet {
    min-width: 12px;
    min-height: 12px;
    padding: 0;
    border-radius: 6px;
    background-color: #ccd1c4;
}

.works-pagination .bullet.active {
    background-color: #393e46;
}

.counter__title {
    font-weight: bold;
}

.percentage__value {
    font-size: 32px;
    font-weight: bold;
}

.percentage__symbol {
    font-size: 20px;
}

.testimonial {
    padding: 24px;
}

.testimonial__quote {
    font-style: italic;
    font-size: 18px;
}

.testimonial__author {
    font-weight: bold;
}
";

/// Load application CSS styles
pub fn load_css() {
    let Some(display) = Display::default() else {
        log::warn!("No display available, skipping page styles");
        return;
    };

    let provider = CssProvider::new();
    provider.load_from_data(PAGE_CSS);

    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
