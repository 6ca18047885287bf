//! Interactive forms and table rendering for the console.
//!
//! Each fill function walks the draft's fields with dialoguer prompts,
//! pre-seeding every prompt with the draft's current value so edits only
//! retype what changes.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Password, Select};

use collegiate_models::auth::SignupRequest;
use collegiate_models::ids::{DepartmentId, FacultyId};
use collegiate_models::roles::Role;
use collegiate_models::{
    Course, CourseRequest, Department, DepartmentRequest, Faculty, FacultyRequest, Student,
    StudentRequest, User, UserRequest,
};

fn input_text(prompt: &str, current: &str) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    Ok(input.interact_text()?)
}

fn input_optional(prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("{prompt} (optional)"))
        .allow_empty(true);
    if let Some(current) = current {
        input = input.with_initial_text(current);
    }
    let value = input.interact_text()?;
    Ok(if value.trim().is_empty() {
        None
    } else {
        Some(value)
    })
}

fn input_date(prompt: &str, current: Option<NaiveDate>) -> Result<NaiveDate> {
    let mut input = Input::<String>::new()
        .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
        .validate_with(|value: &String| {
            value
                .parse::<NaiveDate>()
                .map(drop)
                .map_err(|_| "Enter a date as YYYY-MM-DD")
        });
    if let Some(current) = current {
        input = input.with_initial_text(current.to_string());
    }
    let value = input.interact_text()?;
    Ok(value.parse()?)
}

fn input_id(prompt: &str, current: i64) -> Result<i64> {
    let mut input = Input::<i64>::new().with_prompt(prompt);
    if current != 0 {
        input = input.with_initial_text(current.to_string());
    }
    Ok(input.interact_text()?)
}

fn select_role(current: &str) -> Result<String> {
    let names: Vec<&str> = Role::ALL.iter().map(|role| role.name()).collect();
    let default = names.iter().position(|name| *name == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt("Role")
        .items(&names)
        .default(default)
        .interact()?;
    Ok(names[index].to_string())
}

pub fn prompt_signup() -> Result<SignupRequest> {
    let username = input_text("Username", "")?;
    let name = input_text("Name", "")?;
    let phone = input_text("Phone", "")?;
    let email = input_text("Email", "")?;
    let role = select_role(Role::Student.name())?;
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()?;
    Ok(SignupRequest {
        username,
        name,
        phone,
        password,
        email,
        role,
    })
}

pub fn fill_student(draft: &mut StudentRequest) -> Result<()> {
    draft.student_name = input_text("Name", &draft.student_name)?;
    draft.email = input_text("Email", &draft.email)?;
    draft.course = input_text("Course", &draft.course)?;
    draft.branch = input_text("Branch", &draft.branch)?;
    draft.address = input_text("Address", &draft.address)?;
    draft.phone_number = input_text("Phone number", &draft.phone_number)?;
    draft.date_of_birth = Some(input_date("Date of birth", draft.date_of_birth)?);
    draft.department_id = DepartmentId::new(input_id(
        "Department id",
        draft.department_id.value(),
    )?);
    Ok(())
}

pub fn fill_faculty(draft: &mut FacultyRequest) -> Result<()> {
    draft.faculty_name = input_text("Name", &draft.faculty_name)?;
    draft.email = input_text("Email", &draft.email)?;
    draft.specialization = input_text("Specialization", &draft.specialization)?;
    draft.phone_number = input_text("Phone number", &draft.phone_number)?;
    draft.designation = input_text("Designation", &draft.designation)?;
    Ok(())
}

pub fn fill_course(draft: &mut CourseRequest) -> Result<()> {
    draft.course_name = input_text("Name", &draft.course_name)?;
    draft.credits = input_text("Credits", &draft.credits)?;
    draft.durations = input_text("Duration", &draft.durations)?;
    draft.faculty_id = FacultyId::new(input_id("Faculty id", draft.faculty_id.value())?);
    Ok(())
}

pub fn fill_department(draft: &mut DepartmentRequest) -> Result<()> {
    draft.department_name = input_text("Name", &draft.department_name)?;
    draft.head_of_department = input_optional(
        "Head of department",
        draft.head_of_department.as_deref(),
    )?;
    Ok(())
}

pub fn fill_user(draft: &mut UserRequest) -> Result<()> {
    draft.username = input_text("Username", &draft.username)?;
    draft.name = input_text("Name", &draft.name)?;
    draft.email = input_text("Email", &draft.email)?;
    draft.phone = input_text("Phone", &draft.phone)?;
    draft.role = select_role(&draft.role)?;
    draft.password = Password::new()
        .with_prompt("Password (leave empty to keep unchanged)")
        .allow_empty_password(true)
        .interact()?;
    Ok(())
}

pub fn print_students(students: &[Student]) {
    println!(
        "{:<6} {:<22} {:<28} {:<12} {:<8} {:<12} {:<12} {}",
        "ID", "Name", "Email", "Course", "Branch", "Phone", "DOB", "Department"
    );
    for student in students {
        println!(
            "{:<6} {:<22} {:<28} {:<12} {:<8} {:<12} {:<12} {}",
            student.student_id,
            student.student_name,
            student.email,
            student.course,
            student.branch,
            student.phone_number,
            student.date_of_birth,
            student.department_name
        );
    }
    println!("\n{} student(s)", students.len());
}

pub fn print_faculties(faculties: &[Faculty]) {
    println!(
        "{:<6} {:<22} {:<18} {:<28} {:<12} {}",
        "ID", "Name", "Designation", "Email", "Phone", "Specialization"
    );
    for faculty in faculties {
        println!(
            "{:<6} {:<22} {:<18} {:<28} {:<12} {}",
            faculty.faculty_id,
            faculty.faculty_name,
            faculty.designation,
            faculty.email,
            faculty.phone_number,
            faculty.specialization
        );
    }
    println!("\n{} faculty member(s)", faculties.len());
}

pub fn print_courses(courses: &[Course]) {
    println!(
        "{:<6} {:<24} {:<8} {:<14} {}",
        "ID", "Name", "Credits", "Duration", "Faculty"
    );
    for course in courses {
        println!(
            "{:<6} {:<24} {:<8} {:<14} {}",
            course.course_id,
            course.course_name,
            course.credits,
            course.durations,
            course.faculty_name.as_deref().unwrap_or("-")
        );
    }
    println!("\n{} course(s)", courses.len());
}

pub fn print_departments(departments: &[Department]) {
    println!("{:<6} {:<28} {}", "ID", "Name", "Head");
    for department in departments {
        println!(
            "{:<6} {:<28} {}",
            department.department_id,
            department.department_name,
            department.head_of_department.as_deref().unwrap_or("-")
        );
    }
    println!("\n{} department(s)", departments.len());
}

pub fn print_users(users: &[User]) {
    println!(
        "{:<6} {:<16} {:<22} {:<28} {:<12} {}",
        "ID", "Username", "Name", "Email", "Phone", "Role"
    );
    for user in users {
        let role = user
            .role
            .as_deref()
            .map(String::from)
            .or_else(|| user.roles.as_ref().map(|roles| roles.join(", ")))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<16} {:<22} {:<28} {:<12} {}",
            user.id, user.username, user.name, user.email, user.phone, role
        );
    }
    println!("\n{} user(s)", users.len());
}
