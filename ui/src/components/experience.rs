use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{EducationEntry, ExperienceEntry};

/// One employment period as a vertical timeline node. Each sub-project
/// gets its own bullet list; a sub-project with an empty name keeps its
/// bullets but drops the sub-heading.
#[component]
pub fn ExperienceItem(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="border-l-2 border-slate-200 pl-8 pb-12 relative last:pb-0">
            <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-primary border-4 border-white shadow-sm"></div>
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between mb-2">
                <h3 class="text-xl font-bold text-slate-800">{entry.company}</h3>
                <span class="text-sm text-slate-500 font-medium bg-slate-100 px-3 py-1 rounded-full w-fit mt-2 sm:mt-0">
                    {entry.period}
                </span>
            </div>
            <p class="text-lg text-primary font-medium mb-4">{entry.role}</p>

            <div class="space-y-6">
                {entry.sub_projects.iter().map(|project| view! {
                    <div>
                        {(!project.name.is_empty()).then(|| view! {
                            <h4 class="font-semibold text-slate-700 mb-2 flex items-center">
                                <span class="w-1.5 h-1.5 bg-slate-400 rounded-full mr-2"></span>
                                {project.name}
                            </h4>
                        })}
                        <ul class="space-y-1.5 text-slate-600 pl-4 border-l border-slate-100 ml-0.5">
                            {project.bullets.iter().map(|bullet| view! {
                                <li class="text-sm flex items-start">
                                    <span class="mr-2 mt-1.5 w-1 h-1 bg-slate-300 rounded-full flex-shrink-0"></span>
                                    {*bullet}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn EducationItem(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <div class="border-l-2 border-slate-200 pl-8 pb-12 relative">
            <div class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-slate-400 border-4 border-white shadow-sm"></div>
            <h3 class="text-xl font-bold text-slate-800">{entry.school}</h3>
            <p class="text-slate-600 mb-1">{entry.degree}</p>
            <span class="text-sm text-slate-500 bg-slate-100 px-2 py-0.5 rounded">{entry.period}</span>

            {(!entry.awards.is_empty()).then(|| view! {
                <div class="mt-6">
                    <div class="flex items-center mb-3">
                        <span class="text-primary mr-2"><Icon glyph=Glyph::Award size=18/></span>
                        <h4 class="font-semibold text-slate-800">"Awards"</h4>
                    </div>
                    <ul class="space-y-2 text-slate-600 text-sm">
                        {entry.awards.iter().map(|award| view! {
                            <li>"• " {*award}</li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
