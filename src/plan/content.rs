/// Guidance shown alongside a week's checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekInfo {
    pub title: &'static str,
    pub focus: &'static str,
    pub script: &'static str,
    pub quote: &'static str,
}

pub const WEEKLY_INFO: [WeekInfo; 4] = [
    WeekInfo {
        title: "Week 1",
        focus: "Practice tone & transition",
        script: "Hey [Name], just wanted to check in and see how you're doing. \
By the way, I'm now doing real estate alongside seminary. My goal is just to be a \
resource when people have questions about homes or the market.",
        quote: "The journey of a thousand miles begins with one step.",
    },
    WeekInfo {
        title: "Week 2",
        focus: "Gather emails",
        script: "Hi [Name], how are you? I'd love to keep you in the loop. \
What's the best email for you?",
        quote: "Consistency breeds success.",
    },
    WeekInfo {
        title: "Week 3",
        focus: "Ask curiosity-driven questions",
        script: "Hi [Name], how are things going in your neighborhood? \
Have you noticed more homes selling around you lately?",
        quote: "Questions are the engines of intellect.",
    },
    WeekInfo {
        title: "Week 4",
        focus: "Offer value",
        script: "Hi [Name], would it be helpful if I put together a quick home value \
update for you? Many of my friends have been surprised at what their homes are worth today.",
        quote: "Value is delivered by understanding needs.",
    },
];
