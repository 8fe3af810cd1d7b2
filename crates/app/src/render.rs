//! Plain-text rendering of page view models.

use ui::vm::{BookmarkRowVm, CourseCardVm, CourseVm, HomeVm, LessonVm, Page, PageVm};

pub fn page(page: &Page, html: bool) -> String {
    let mut lines = Vec::new();
    if let Some(notice) = page.notice {
        lines.push(notice.to_string());
        lines.push(String::new());
    }
    match &page.vm {
        PageVm::Home { home: vm, bookmarks: rows } => {
            home(&mut lines, vm);
            if !rows.is_empty() {
                lines.push(String::new());
                bookmarks(&mut lines, rows);
            }
        }
        PageVm::Lessons(vm) => course(&mut lines, vm),
        PageVm::Lesson(vm) => lesson(&mut lines, vm, html),
    }
    join(lines)
}

pub fn home_view(vm: &HomeVm) -> String {
    let mut lines = Vec::new();
    home(&mut lines, vm);
    join(lines)
}

pub fn bookmark_list(rows: &[BookmarkRowVm]) -> String {
    let mut lines = Vec::new();
    bookmarks(&mut lines, rows);
    join(lines)
}

pub fn categories(names: &[&str]) -> String {
    join(names.iter().map(|name| (*name).to_owned()).collect())
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn home(lines: &mut Vec<String>, vm: &HomeVm) {
    lines.push(format!("Courses ({} available)", vm.total_courses));
    let chips: Vec<String> = vm
        .categories
        .iter()
        .map(|chip| {
            if chip.active {
                format!("[{}]", chip.label)
            } else {
                chip.label.clone()
            }
        })
        .collect();
    lines.push(chips.join(" | "));
    if vm.cards.is_empty() {
        lines.push(String::new());
        lines.push("No courses match.".to_owned());
    }
    for card in &vm.cards {
        lines.push(String::new());
        course_card(lines, card);
    }
}

fn course_card(lines: &mut Vec<String>, card: &CourseCardVm) {
    lines.push(format!("{} {}  (#{})", card.icon, card.title, card.id));
    lines.push(format!("    {}", card.excerpt));
    lines.push(format!(
        "    ★ {} | {} | {} lessons | {}",
        card.rating, card.students_label, card.lesson_count, card.progress_label
    ));
    lines.push(format!("    {}", card.route.href()));
}

fn course(lines: &mut Vec<String>, vm: &CourseVm) {
    lines.push(vm.title.clone());
    lines.push(format!("Instructor: {}", vm.instructor));
    lines.push(format!("Duration: {}", vm.duration));
    lines.push(format!("Level: {}", vm.level));
    lines.push(format!("Rating: {}", vm.rating_label));
    lines.push(vm.students_label.clone());
    lines.push(String::new());
    lines.push(vm.description.clone());
    lines.push(String::new());
    lines.push(vm.progress_label.clone());
    for row in &vm.lessons {
        let mut badges = row.number_label.clone();
        if row.completed {
            badges.push_str("  ✓ Completed");
        }
        if row.bookmarked {
            badges.push_str("  ★ Bookmarked");
        }
        lines.push(String::new());
        lines.push(badges);
        lines.push(format!("    {}", row.title));
        lines.push(format!("    {}", row.description));
        lines.push(format!("    ⏱ {}  {}", row.duration, row.route.href()));
    }
}

fn lesson(lines: &mut Vec<String>, vm: &LessonVm, html: bool) {
    lines.push(format!("{} · {}", vm.course_title, vm.number_label));
    lines.push(vm.title.clone());
    lines.push(format!("Duration: {}", vm.duration));
    if let Some(url) = &vm.video_url {
        lines.push(format!("Video: {url}"));
    }
    lines.push(String::new());
    if html {
        lines.push(vm.content_html.trim_end().to_owned());
    } else {
        lines.push(vm.content_markdown.trim_end().to_owned());
    }
    lines.push(String::new());
    lines.push(format!(
        "[{}] [{}]",
        vm.complete_button_label(),
        vm.bookmark_button_label()
    ));
    lines.push(vm.progress_label.clone());
    if let Some(previous) = vm.previous {
        lines.push(format!("Previous: {}", previous.href()));
    }
    if let Some(next) = vm.next {
        lines.push(format!("Next: {}", next.href()));
    }
    lines.push(format!("Back: {}", vm.back.href()));
}

fn bookmarks(lines: &mut Vec<String>, rows: &[BookmarkRowVm]) {
    lines.push("Bookmarks".to_owned());
    if rows.is_empty() {
        lines.push("    none yet".to_owned());
    }
    for row in rows {
        let done = if row.completed { " ✓" } else { "" };
        lines.push(format!(
            "    {} › {}{}  {}",
            row.course_title,
            row.lesson_title,
            done,
            row.route.href()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learn_core::Catalog;
    use services::LearnerSnapshot;
    use ui::NavigationError;
    use ui::vm::build_page;

    #[test]
    fn redirected_page_starts_with_notice() {
        let catalog = Catalog::bundled().unwrap();
        let built = build_page(
            &catalog,
            &LearnerSnapshot::default(),
            Err(NavigationError::CourseNotFound),
        );
        let text = page(&built, false);
        assert!(text.starts_with("Course not found\n"));
        assert!(text.contains("Courses (4 available)"));
        assert!(text.contains("[All Courses]"));
    }
}
