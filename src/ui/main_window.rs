//! Main application window: builds the page and wires its controllers.

use anyhow::{Context, Result};
use folio_core::{FrameDriver, MonotonicClock};
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Label, Orientation, Overlay, PolicyType,
    ScrolledWindow,
};
use std::rc::Rc;

use super::frame_clock::WidgetFrames;
use super::gauge_host::GtkGaugeHost;
use super::header_bar::PageHeader;
use super::slider::{Slide, StackSlider};
use crate::components::{GaugeController, PageContext, ScrollMetrics, WorksText};
use crate::config::AppConfig;
use crate::page::{HostRegistry, Selector};

pub struct MainWindow {
    window: ApplicationWindow,
}

impl MainWindow {
    pub fn new(app: &Application, config: &AppConfig) -> Result<Self> {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.window.title.as_str())
            .default_width(config.window.width)
            .default_height(config.window.height)
            .build();

        let content = gtk4::Box::new(Orientation::Vertical, 0);
        let header = PageHeader::new(&config.window.title);

        let intro = section("intro", &config.window.title);
        intro.set_size_request(-1, config.window.height);
        intro.set_valign(Align::Fill);
        let tagline = Label::new(Some("Design and development portfolio"));
        tagline.add_css_class("intro__tagline");
        intro.append(&tagline);
        content.append(&intro);

        // Works
        let works_section = section("works", "Works");
        let works_slides = config
            .works
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let card = gtk4::Box::new(Orientation::Vertical, 0);
                card.add_css_class("works-slide");
                let label = Label::new(Some(format!("Project {}", index + 1).as_str()));
                label.set_vexpand(true);
                card.append(&label);
                Slide::new(Some(entry.id.clone()), &card)
            })
            .collect();
        let works_slider = StackSlider::new(&config.works.slider, works_slides);
        works_section.append(works_slider.widget());

        let works_label = Label::new(config.works.entries.first().map(|e| e.text.as_str()));
        works_label.add_css_class("works__text");
        works_label.set_wrap(true);
        works_label.set_xalign(0.0);
        works_section.append(&works_label);
        content.append(&works_section);

        let works = WorksText::new(config.works.entries.clone(), Rc::new(works_label));
        works.attach(works_slider.clone());

        // Skills
        let skills_section = section("skills", "Skills");
        let mut registry = HostRegistry::new();
        let mut skill_slides = Vec::with_capacity(config.skills.items.len());
        for item in &config.skills.items {
            let host = Rc::new(GtkGaugeHost::new(item));
            skill_slides.push(Slide::new(item.id.clone(), host.widget()));
            registry.register(host);
        }
        let skills_slider = StackSlider::new(&config.skills.slider, skill_slides);
        skills_section.append(skills_slider.widget());
        content.append(&skills_section);

        let selector = Selector::parse(&config.skills.selector)
            .with_context(|| format!("gauge selector `{}`", config.skills.selector))?;
        let driver = FrameDriver::new(
            Rc::new(MonotonicClock::new()),
            Rc::new(WidgetFrames::new(&window)),
        );
        let gauges = GaugeController::new(&registry, &selector, &config.skills.style, driver)?;

        // Testimonials
        let testimonials_section = section("testimonials", "Testimonials");
        let quote_slides = config
            .testimonials
            .quotes
            .iter()
            .enumerate()
            .map(|(index, testimonial)| {
                let card = gtk4::Box::new(Orientation::Vertical, 12);
                card.add_css_class("testimonial");
                let quote = Label::new(Some(testimonial.quote.as_str()));
                quote.add_css_class("testimonial__quote");
                quote.set_wrap(true);
                let author = Label::new(Some(testimonial.author.as_str()));
                author.add_css_class("testimonial__author");
                card.append(&quote);
                card.append(&author);
                Slide::new(Some(format!("testimonial-{}", index + 1)), &card)
            })
            .collect();
        let testimonials_slider =
            StackSlider::new(&config.testimonials.slider, quote_slides);
        testimonials_section.append(testimonials_slider.widget());
        content.append(&testimonials_section);

        let context = Rc::new(
            PageContext::new(gauges, header.controller())
                .with_replay(config.skills.replay)
                .with_works(works)
                .with_carousel(works_slider)
                .with_carousel(skills_slider)
                .with_carousel(testimonials_slider),
        );

        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .child(&content)
            .build();

        let weak = Rc::downgrade(&context);
        header.burger().connect_clicked(move |_| {
            if let Some(context) = weak.upgrade() {
                context.header().toggle_menu();
            }
        });

        for (label, target) in [
            ("Works", &works_section),
            ("Skills", &skills_section),
            ("Testimonials", &testimonials_section),
        ] {
            let target = target.clone();
            let content = content.clone();
            let adjustment = scrolled.vadjustment();
            header.add_link(label).connect_clicked(move |_| {
                if let Some(y) = offset_in(&target, &content) {
                    adjustment.set_value(y);
                }
            });
        }

        let scroll_context = context.clone();
        let section_widget = skills_section.clone();
        let page = content.clone();
        scrolled.vadjustment().connect_value_changed(move |adjustment| {
            let section_top = offset_in(&section_widget, &page).unwrap_or(f64::INFINITY);
            scroll_context.on_scroll(ScrollMetrics {
                scroll_y: adjustment.value(),
                viewport_height: adjustment.page_size(),
                section_top,
            });
        });

        let overlay = Overlay::new();
        overlay.set_child(Some(&scrolled));
        overlay.add_overlay(header.widget());
        window.set_child(Some(&overlay));

        log::info!(
            "Built page: {} works slides, {} gauges, {} testimonials",
            config.works.entries.len(),
            context.gauges().len(),
            config.testimonials.quotes.len()
        );

        Ok(Self { window })
    }

    pub fn present(&self) {
        self.window.present();
    }
}

/// Load the page styles and show a new main window.
pub fn build_ui(app: &Application, config: &AppConfig) -> Result<()> {
    super::theme::load_css();
    let window = MainWindow::new(app, config)?;
    window.present();
    Ok(())
}

fn section(name: &str, title: &str) -> gtk4::Box {
    let section = gtk4::Box::new(Orientation::Vertical, 16);
    section.add_css_class("section");
    section.add_css_class(name);
    section.set_widget_name(name);

    let heading = Label::new(Some(title));
    heading.add_css_class("section__title");
    heading.set_halign(Align::Start);
    section.append(&heading);
    section
}

/// Vertical offset of `widget` inside `page`.
fn offset_in(widget: &gtk4::Box, page: &gtk4::Box) -> Option<f64> {
    widget
        .translate_coordinates(page, 0.0, 0.0)
        .map(|(_, y)| y)
}
