//! Built-in Canvas topics
//!
//! Patterns and answers for UMass Boston students getting started with Canvas.
//! Order matters: earlier topics shadow later ones that match the same input.

use super::config::{ResponderError, TopicTable};

const PATTERNS: &[(&str, &[&str])] = &[
    (
        "greetings",
        &[
            r"hello",
            r"hi",
            r"hey",
            r"good morning",
            r"good afternoon",
            r"good evening",
        ],
    ),
    ("access_canvas", &[r"canvas", r"log.*canvas"]),
    ("get_oriented", &[r"get.*oriented", r"overview", r"navigate"]),
    ("edit_notifications", &[r"notifications", r"notification.*settings"]),
    ("navigate_course", &[r"navigate", r"modules", r"course"]),
    ("view_grades", &[r"grades", r"view.*grades"]),
    ("canvas_app", &[r"canvas.*app", r"mobile"]),
    ("resources_help", &[r"help", r"resources", r"support"]),
    ("modules", &[r"modules"]),
    ("learning_activities", &[r"assignments", r"discussions", r"quiz"]),
    ("student_app_ios", &[r"ios", r"apple"]),
    ("student_app_android", &[r"android"]),
    ("additional_resources", &[r"resources", r"guide", r"help"]),
];

const STUDENT_GUIDE_TOC: &str = "[Canvas Student Guide Table of Contents](https://community.canvaslms.com/docs/DOC-10701-canvas-student-guide-table-of-contents)";
const SUPPORT_CHAT: &str = "[Chat with Canvas Support](https://cases.canvaslms.com/liveagentchat?chattype=student&sfid=A5WgTEKARcWFY5IXRv5FT8ePIss19I2qCvHxwOtD)";

fn responses() -> Vec<(&'static str, String)> {
    vec![
        (
            "greetings",
            "Hello! Welcome to Canvas Assistant. How can I assist you today?".to_string(),
        ),
        (
            "access_canvas",
            "To access Canvas, navigate to [umassboston.instructure.com](https://umassboston.instructure.com) \
             and log in with your UMass Boston email username and password."
                .to_string(),
        ),
        (
            "get_oriented",
            "You can watch the Canvas Overview video to learn how to navigate through the general areas \
             in your Canvas account. [Watch the video here](https://community.canvaslms.com/t5/Video-Guide/Canvas-Overview-Students/ta-p/383771)."
                .to_string(),
        ),
        (
            "edit_notifications",
            "You can customize your account notification settings in Canvas. Here's a \
             [tutorial on how to review and choose notifications](https://community.canvaslms.com/t5/Video-Guide/Notification-Settings-All-Users/ta-p/383690)."
                .to_string(),
        ),
        (
            "navigate_course",
            "Navigate your course by using the menu on the left-hand side of the screen. This includes \
             links to modules, assignments, discussions, and grades. \
             [Learn more about navigating your course](https://bit.ly/GetStartedCanvas_UMBStudent)."
                .to_string(),
        ),
        (
            "view_grades",
            "To view your grades, go to the 'Grades' section in Canvas. \
             [Here's how you can view your grades](https://community.canvaslms.com/t5/Student-Guide/How-do-I-view-my-grades-in-a-current-course/ta-p/493).\n\n\
             To view feedback comments from your instructor directly in your assignment submission, \
             here's more detail: \
             [View Annotation Feedback](https://community.canvaslms.com/t5/Student-Guide/How-do-I-view-annotation-feedback-comments-from-my-instructor/ta-p/523)."
                .to_string(),
        ),
        (
            "canvas_app",
            "Canvas has a mobile app available for both iOS and Android. \
             [Learn how to download and use the Canvas Student app](https://bit.ly/GetStartedCanvas_UMBStudent)."
                .to_string(),
        ),
        (
            "resources_help",
            format!(
                "For more in-depth resources, visit the [Canvas Student Guide](https://bit.ly/GetStartedCanvas_UMBStudent) \
                 or click the Help button on your Canvas dashboard for more support.\n\n\
                 You can also access the Chat with Canvas Support to start an online chat with a Canvas Expert anytime.\n\n\
                 Additional resources:\n\
                 - {STUDENT_GUIDE_TOC}\n\
                 - {SUPPORT_CHAT}"
            ),
        ),
        (
            "modules",
            "Click on the Modules link in the course menu to see a list of modules organized by your \
             instructor. Modules contain learning materials, readings, assignments, and quizzes grouped \
             together by topic or week. \
             [More details on viewing Modules](https://community.canvaslms.com/t5/Student-Guide/How-do-I-view-Modules-as-a-student/ta-p/433)."
                .to_string(),
        ),
        (
            "learning_activities",
            "Completing graded assignments and activities in Canvas is straightforward. These tasks will \
             typically be accessible through their respective module pages. Or you can access assignments \
             directly from the Assignments page if your instructor does not use a Module page. For more help:\n\n\
             - [How do I submit an online assignment?](https://community.canvaslms.com/t5/Student-Guide/How-do-I-submit-an-online-assignment/ta-p/503)\n\
             - [How do I reply to a discussion as a student?](https://community.canvaslms.com/t5/Student-Guide/How-do-I-reply-to-a-discussion-as-a-student/ta-p/334)\n\
             - [How do I take a quiz in New Quizzes?](https://community.canvaslms.com/t5/Student-Guide/How-do-I-take-a-quiz-in-New-Quizzes/ta-p/291)"
                .to_string(),
        ),
        ("student_app_ios", mobile_app_guide("iOS", &[
            ("Download the Canvas Student app on iOS", "https://community.canvaslms.com/t5/Canvas-Student-iOS-Guide/How-do-I-download-the-Canvas-Student-app-on-my-iOS-device/ta-p/1932"),
            ("Log in to the Canvas Student app on iOS", "https://community.canvaslms.com/t5/Canvas-Student-iOS-Guide/How-do-I-log-in-to-the-Student-app-on-my-iOS-device-with-a/ta-p/1940"),
            ("Use the Canvas Student app on iOS", "https://community.canvaslms.com/t5/Canvas-Student-iOS-Guide/How-do-I-use-the-Student-app-on-my-iOS-device/ta-p/1939"),
        ])),
        ("student_app_android", mobile_app_guide("Android", &[
            ("Download the Canvas Student app on Android", "https://community.canvaslms.com/t5/Canvas-Student-Android-Guide/How-do-I-download-the-Canvas-Student-app-on-my-Android-device/ta-p/1860"),
            ("Log in to the Canvas Student app on Android", "https://community.canvaslms.com/t5/Canvas-Student-Android-Guide/How-do-I-log-in-to-the-Student-app-on-my-Android-device-with-a-Canvas-URL/ta-p/1940"),
            ("Use the Canvas Student app on Android", "https://community.canvaslms.com/t5/Canvas-Student-Android-Guide/How-do-I-use-the-Student-app-on-my-Android-device/ta-p/1939"),
        ])),
        (
            "additional_resources",
            format!(
                "For additional learning resources, the Canvas Student Guide has over 200 articles. Each \
                 article includes Next and Previous links so you can easily navigate to related content.\n\n\
                 - {STUDENT_GUIDE_TOC}\n\
                 - {SUPPORT_CHAT}"
            ),
        ),
    ]
}

fn mobile_app_guide(platform: &str, links: &[(&str, &str)]) -> String {
    let mut text = format!(
        "Canvas also has a free mobile app available for {platform}. Here's how you can use it:\n"
    );
    for (label, url) in links {
        text.push_str(&format!("\n- [{label}]({url})"));
    }
    text
}

/// The built-in Canvas topic table
pub fn canvas_topics() -> Result<TopicTable, ResponderError> {
    TopicTable::from_parts(
        PATTERNS.iter().map(|(id, patterns)| {
            (
                id.to_string(),
                patterns.iter().map(|p| p.to_string()).collect(),
            )
        }),
        responses()
            .into_iter()
            .map(|(id, text)| (id.to_string(), text)),
    )
}
