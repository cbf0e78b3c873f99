//! Conversion between wire messages and entities.
//!
//! Everything here is pure. On the update path the presence of a child `id`
//! is the only thing that decides insert versus update.

use course_core::entities::{Course, CourseDraft, Lesson, LessonDraft, ThemeDraft};
use course_core::messages::{
    CourseMessage, CreateCourseRequest, CreateLesson, CreateTheme, GetAllCoursesResponse,
    GetCourseResponse, LessonMessage, ThemeMessage, UpdateCourseRequest, UpdateLesson,
    UpdateTheme,
};
use course_core::tree::{
    ChildOp, CourseTree, CourseTreeUpdate, CourseWithThemes, ThemeTree, ThemeTreeUpdate,
    ThemeWithLessons,
};

// ---------------------------------------------------------------------------
// Requests -> entities
// ---------------------------------------------------------------------------

#[must_use]
pub fn create_request_to_tree(request: CreateCourseRequest) -> CourseTree {
    CourseTree {
        course: CourseDraft {
            title: request.title,
            description: request.description,
            full_description: request.full_description,
            work: request.work,
            difficulty: request.difficulty,
            duration: request.duration,
            image: request.image,
        },
        themes: request.themes.into_iter().map(create_theme_to_tree).collect(),
    }
}

fn create_theme_to_tree(theme: CreateTheme) -> ThemeTree {
    ThemeTree {
        theme: ThemeDraft { title: theme.title },
        lessons: theme.lessons.into_iter().map(create_lesson_to_draft).collect(),
    }
}

fn create_lesson_to_draft(lesson: CreateLesson) -> LessonDraft {
    LessonDraft {
        title: lesson.title,
        kind: lesson.kind,
        duration: lesson.duration,
        content: lesson.content,
        practice_type: lesson.practice_type,
        task: lesson.task,
        completed: lesson.completed,
    }
}

#[must_use]
pub fn update_request_to_tree(request: UpdateCourseRequest) -> CourseTreeUpdate {
    CourseTreeUpdate {
        id: request.id,
        course: CourseDraft {
            title: request.title,
            description: request.description,
            full_description: request.full_description,
            work: request.work,
            difficulty: request.difficulty,
            duration: request.duration,
            image: request.image,
        },
        themes: request.themes.into_iter().map(update_theme_to_tree).collect(),
    }
}

fn update_theme_to_tree(theme: UpdateTheme) -> ThemeTreeUpdate {
    ThemeTreeUpdate {
        theme: ChildOp::from_optional_id(theme.id, ThemeDraft { title: theme.title }),
        lessons: theme.lessons.into_iter().map(update_lesson_to_op).collect(),
    }
}

fn update_lesson_to_op(lesson: UpdateLesson) -> ChildOp<LessonDraft> {
    ChildOp::from_optional_id(
        lesson.id,
        LessonDraft {
            title: lesson.title,
            kind: lesson.kind,
            duration: lesson.duration,
            content: lesson.content,
            practice_type: lesson.practice_type,
            task: lesson.task,
            completed: lesson.completed,
        },
    )
}

// ---------------------------------------------------------------------------
// Entities -> responses
// ---------------------------------------------------------------------------

#[must_use]
pub fn course_to_message(course: Course) -> CourseMessage {
    CourseMessage {
        id: course.id,
        title: course.title,
        description: course.description,
        full_description: course.full_description,
        work: course.work,
        difficulty: course.difficulty,
        duration: course.duration,
        image: course.image,
    }
}

#[must_use]
pub fn courses_to_response(courses: Vec<Course>) -> GetAllCoursesResponse {
    GetAllCoursesResponse {
        courses: courses.into_iter().map(course_to_message).collect(),
    }
}

#[must_use]
pub fn tree_to_response(tree: CourseWithThemes) -> GetCourseResponse {
    let course = tree.course;
    GetCourseResponse {
        id: course.id,
        title: course.title,
        description: course.description,
        full_description: course.full_description,
        work: course.work,
        difficulty: course.difficulty,
        duration: course.duration,
        image: course.image,
        themes: tree.themes.into_iter().map(theme_to_message).collect(),
    }
}

fn theme_to_message(node: ThemeWithLessons) -> ThemeMessage {
    ThemeMessage {
        id: node.theme.id,
        title: node.theme.title,
        lessons: node.lessons.into_iter().map(lesson_to_message).collect(),
    }
}

fn lesson_to_message(lesson: Lesson) -> LessonMessage {
    LessonMessage {
        id: lesson.id,
        title: lesson.title,
        kind: lesson.kind,
        duration: lesson.duration,
        content: lesson.content,
        practice_type: lesson.practice_type,
        task: lesson.task,
        completed: lesson.completed,
    }
}
