use leptos::prelude::*;

use crate::components::experience::{EducationItem, ExperienceItem};
use crate::components::icons::{Glyph, Icon};
use crate::components::project_card::ProjectCard;
use crate::components::section::Section;
use crate::content::{self, SkillCategory};

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="about" class="pt-32 pb-20 px-6 md:px-12 lg:px-24 flex flex-col justify-center min-h-[60vh]">
            <div class="max-w-6xl mx-auto w-full">
                <h1 class="text-3xl md:text-5xl font-extrabold text-slate-900 mb-6 tracking-tight">
                    "Hello."<br/>
                    "I am " <span class="text-primary">"Young Jae Shin"</span> ", developer."
                </h1>
                <p class="text-xl md:text-2xl text-slate-600 max-w-2xl mb-10 leading-relaxed">
                    "Diligence and ownership, applied to every project" <br class="hidden md:block"/>
                    " until it ships at 120%."
                </p>
                <div class="flex flex-wrap gap-4">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-primary text-white font-semibold rounded-lg hover:bg-blue-700 transition-colors shadow-lg shadow-blue-500/30"
                    >"View Projects"</a>
                    <a
                        href="#contact"
                        class="px-8 py-3 bg-white text-slate-700 font-semibold rounded-lg border border-slate-200 hover:bg-slate-50 transition-colors"
                    >"Get in Touch"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ColumnHeading(glyph: Glyph, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center mb-8">
            <span class="text-primary mr-3"><Icon glyph/></span>
            <h3 class="text-2xl font-bold text-slate-800">{label}</h3>
        </div>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-50 rounded-xl border border-slate-100">
            <div class=format!("w-12 h-12 {} rounded-lg flex items-center justify-center mb-4", category.accent)>
                <Icon glyph=category.glyph/>
            </div>
            <h3 class="text-xl font-bold mb-4 text-slate-800">{category.label}</h3>
            <div class="flex flex-wrap gap-2">
                {category.skills.iter().map(|skill| view! {
                    <span class="px-3 py-1 bg-white border border-slate-200 rounded-md text-sm font-medium text-slate-600">
                        {*skill}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

/// The whole page below the nav bar: hero, then the four anchored
/// sections in nav order, all populated straight from the catalog.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero/>

        <Section id="experience" title="Experience & Education" extra="bg-white">
            <div class="grid md:grid-cols-2 gap-16">
                <div>
                    <ColumnHeading glyph=Glyph::Briefcase label="Work Experience"/>
                    <div class="space-y-2">
                        {content::EXPERIENCE.iter().map(|entry| view! {
                            <ExperienceItem entry/>
                        }).collect_view()}
                    </div>
                </div>

                <div>
                    <ColumnHeading glyph=Glyph::GraduationCap label="Education"/>
                    {content::EDUCATION.iter().map(|entry| view! {
                        <EducationItem entry/>
                    }).collect_view()}
                </div>
            </div>
        </Section>

        <Section id="projects" title="Featured Projects">
            <div class="grid md:grid-cols-2 gap-8">
                {content::PROJECTS.iter().map(|entry| view! {
                    <ProjectCard entry/>
                }).collect_view()}
            </div>
        </Section>

        <Section id="skills" title="Technical Skills" extra="bg-white">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {content::SKILLS.iter().map(|category| view! {
                    <SkillCard category/>
                }).collect_view()}
            </div>
        </Section>

        <Section id="contact" title="Get In Touch">
            <div class="bg-primary rounded-2xl p-8 md:p-16 text-center text-white shadow-xl shadow-blue-900/20">
                <h3 class="text-2xl md:text-3xl font-bold mb-6">"Thank you for reading."</h3>
                <p class="text-blue-100 mb-10 max-w-2xl mx-auto text-lg">
                    "Always happy to talk." <br/>
                    "Email me and I will get back to you quickly."
                </p>
                <a
                    href=format!("mailto:{}", content::CONTACT_EMAIL)
                    class="inline-flex items-center px-8 py-4 bg-white text-primary font-bold rounded-lg hover:bg-blue-50 transition-colors"
                >
                    <span class="mr-2"><Icon glyph=Glyph::Mail size=20/></span>
                    {content::CONTACT_EMAIL}
                </a>
            </div>
        </Section>
    }
}
