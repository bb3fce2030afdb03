// Shared fixtures for integration tests

use family_timetable::models::schedule::ScheduleRow;

/// Two realistic tables, one per child.
pub fn two_kid_tables() -> (Vec<ScheduleRow>, Vec<ScheduleRow>) {
    let first = vec![
        ScheduleRow::new("School", "Mon,Tue,Wed,Thu,Fri", "09:00", "13:00", "#5D9CEC"),
        ScheduleRow::new("Art Class", "Mon,Wed,Fri", "14:00", "16:00", "#FB6E52"),
        ScheduleRow::new("Swimming", "Sat", "10:00", "11:30", "#48CFAD"),
    ];
    let second = vec![
        ScheduleRow::new("Kindergarten", "Mon,Tue,Wed,Thu,Fri", "09:30", "13:30", "#FFCE54"),
        ScheduleRow::new("Taekwondo", "Tue,Thu", "15:00", "16:00", "#AC92EC"),
    ];
    (first, second)
}

/// A table in the middle of being typed: valid rows mixed with every
/// kind of transiently broken one.
pub fn half_typed_table() -> Vec<ScheduleRow> {
    vec![
        ScheduleRow::new("School", "Mon,Wed", "09:00", "13:00", "#5D9CEC"),
        ScheduleRow::new("", "Mon", "09:00", "10:00", ""),
        ScheduleRow::new("Piano", "Tue", "0900", "10:00", ""),
        ScheduleRow::new("Ballet", "Xyz,Abc", "16:00", "17:00", "#EC87C0"),
        ScheduleRow::new("Soccer", "Fri", "17:00", "ab:cd", ""),
        ScheduleRow::new("Nap", "Wed", "13:30", "14:00", "not-a-color"),
    ]
}
