// src/main.rs — OPTICODE registration site (Rust + Yew + WASM)
//
// Single-page promo site for the OPTICODE code-minimization contest at BIET
// Davangere: marketing sections, an FAQ accordion, and one registration form
// that inserts a row into a Supabase table over its REST interface.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

// ---------- backend config ----------

const REGISTRATIONS_TABLE: &str = "registrations";

/// Supabase endpoint + anon key, baked in at build time:
/// `SUPABASE_URL=... SUPABASE_ANON_KEY=... trunk build`.
#[derive(Debug, Clone, PartialEq)]
struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    fn from_build_env() -> Self {
        Self {
            url: option_env!("SUPABASE_URL").unwrap_or("").to_string(),
            anon_key: option_env!("SUPABASE_ANON_KEY").unwrap_or("").to_string(),
        }
    }

    fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    fn insert_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }
}

// ---------- insert operation ----------

const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// Failed insert attempt. `message` carries the backend's own error text when
/// it sent one; `None` means we only know that the write did not happen.
#[derive(Debug, Clone, PartialEq)]
struct InsertError {
    message: Option<String>,
}

impl InsertError {
    fn user_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR)
    }
}

/// Error body PostgREST returns on a rejected write.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn insert_registration(cfg: &SupabaseConfig, row: &RegistrationRow) -> Result<(), InsertError> {
    let resp = Request::post(&cfg.insert_url(REGISTRATIONS_TABLE))
        .header("apikey", &cfg.anon_key)
        .header("Authorization", &format!("Bearer {}", cfg.anon_key))
        .header("Prefer", "return=minimal")
        .json(&[row])
        .map_err(|e| InsertError { message: Some(e.to_string()) })?
        .send()
        .await
        .map_err(|e| InsertError { message: Some(e.to_string()) })?;

    if resp.ok() {
        return Ok(());
    }

    let message = resp.json::<ApiErrorBody>().await.ok().and_then(|b| b.message);
    Err(InsertError { message })
}

// ---------- registration form ----------

/// The eight form fields, exactly as the user typed them. Enumerated fields
/// (`department`, `semester`) hold the select values; `usn` and `section` are
/// upper-cased already at input time.
#[derive(Debug, Clone, PartialEq, Default)]
struct RegistrationForm {
    name: String,
    email: String,
    department: String,
    usn: String,
    hackerrank: String,
    semester: String,
    section: String,
    agreed: bool,
}

/// One row as sent to the backend: free-text fields trimmed, `usn`/`section`
/// upper-cased, selections and the consent flag passed through.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct RegistrationRow {
    name: String,
    email: String,
    department: String,
    usn: String,
    hackerrank: String,
    semester: String,
    section: String,
    agreed: bool,
}

impl RegistrationForm {
    fn row(&self) -> RegistrationRow {
        RegistrationRow {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
            usn: self.usn.trim().to_uppercase(),
            hackerrank: self.hackerrank.trim().to_string(),
            semester: self.semester.clone(),
            section: self.section.trim().to_uppercase(),
            agreed: self.agreed,
        }
    }
}

// ---------- submission workflow ----------

const SUCCESS_MESSAGE: &str = "Registration submitted! Check your email for the HackerRank link.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct SubmissionStatus {
    kind: StatusKind,
    message: String,
}

impl SubmissionStatus {
    fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failure(err: &InsertError) -> Self {
        Self {
            kind: StatusKind::Error,
            message: err.user_message().to_string(),
        }
    }

    fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Gate for a submit attempt. While an insert is outstanding this yields
/// nothing, so a second click cannot issue a second write.
fn begin_submission(in_flight: bool, form: &RegistrationForm) -> Option<RegistrationRow> {
    if in_flight {
        return None;
    }
    Some(form.row())
}

/// Maps the insert outcome onto form + status: success wipes the form back to
/// its initial state, failure leaves it alone (`None`) so nothing is retyped.
fn settle_submission(result: &Result<(), InsertError>) -> (Option<RegistrationForm>, SubmissionStatus) {
    match result {
        Ok(()) => (Some(RegistrationForm::default()), SubmissionStatus::success()),
        Err(err) => (None, SubmissionStatus::failure(err)),
    }
}

// ---------- page content ----------

const DEPARTMENTS: &[(&str, &str)] = &[
    ("CSE", "Computer Science and Engineering"),
    ("AIML", "Artificial Intelligence and Machine Learning"),
    ("ISE", "Information Science Engineering"),
    ("CSBS", "Computer Science and Business Studies"),
    ("CSD", "Computer Science and Design"),
    ("DS", "Data Science"),
    ("ECE", "Electronics and Communication Engineering"),
];

fn semester_label(sem: u8) -> String {
    let suffix = match sem {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{sem}{suffix} Semester")
}

struct Highlight {
    title: &'static str,
    blurb: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Lightning Fast",
        blurb: "Solve problems in record time with optimal algorithms and efficient code structures",
    },
    Highlight {
        title: "Global Community",
        blurb: "Compete against the best coders from around the world and learn from peers",
    },
    Highlight {
        title: "Certificates & Recognition",
        blurb: "All participants receive certificates of participation and achievement",
    },
];

struct Step {
    num: u8,
    title: &'static str,
    blurb: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        num: 1,
        title: "Register",
        blurb: "Sign up for OPTICODE in seconds and join thousands of developers",
    },
    Step {
        num: 2,
        title: "Receive Challenge",
        blurb: "Get your unique coding problem set designed to test your skills",
    },
    Step {
        num: 3,
        title: "Submit & Compete",
        blurb: "Write optimized code and climb the leaderboard to victory",
    },
];

const VERBOSE_SAMPLE: &str = r#"public static int sumArray(int[] numbers) {
    int sum = 0;
    for (int i = 0; i < numbers.length; i++) {
        sum += numbers[i];
    }
    return sum;
}

int[] arr = {1, 2, 3, 4, 5};
int result = sumArray(arr);
System.out.println(result); // 15"#;

const MINIMIZED_SAMPLE: &str = r#"public static int sumArray(int[] numbers) {
    return Arrays.stream(numbers).sum();
}

System.out.println(sumArray(new int[]{1, 2, 3, 4, 5})); // 15"#;

const COMPARISON_STATS: &[(&str, &str)] = &[
    ("60%", "Lines Reduced"),
    ("+150%", "Code Efficiency"),
    ("Enhanced", "Readability"),
];

struct Faculty {
    name: &'static str,
    role: &'static str,
    dept: &'static str,
    image: &'static str,
}

const FACULTY_COORDINATORS: &[Faculty] = &[
    Faculty {
        name: "Vishwanth V K",
        role: "Club Coordinator",
        dept: "CSE",
        image: "vishwanth-vk.jpeg",
    },
    Faculty {
        name: "Dr. Nirmala C R",
        role: "Head of the Department",
        dept: "CSE",
        image: "nirmala-cr.jpeg",
    },
];

const STUDENT_COORDINATORS: &[&str] = &[
    "Sanju K P",
    "Sriganesh H S",
    "Akshay K Bhat",
    "Nachiket V S",
    "Siri P",
    "Sanjana N",
    "Dhanya Shrujana",
    "Prajwal V Pawar",
];

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "When does the contest start?",
        "OPTICODE begins on March 26, 2025 at 10:00 AM. You'll have the day to submit your solutions.",
    ),
    (
        "What languages are supported?",
        "Python, Java, C++, JavaScript, C#, Go, and Rust are all supported. Choose your favorite!",
    ),
    (
        "How is code length measured?",
        "We count non-empty, non-comment lines. The HackerRank platform automatically counts for accuracy.",
    ),
    (
        "Can I team up?",
        "OPTICODE is an individual competition. Each participant competes solo for the best leaderboard placement.",
    ),
    (
        "Are there entry fees?",
        "Completely free! Registration is open to all students worldwide with no hidden costs.",
    ),
    (
        "Will I get a certificate?",
        "Yes! All participants will receive certificates of participation and top performers get special recognition certificates.",
    ),
];

// ---------- static sections ----------

fn hero_section() -> Html {
    html! {
        <section class="hero" id="top">
            <p class="kicker">{ "Bapuji Institute of Engineering & Technology · Davangere" }</p>
            <span class="badge">{ "2025 Elite Coding Challenge" }</span>
            <h1>{ "OPTICODE" }</h1>
            <p class="tagline">{ "{ minimize.code( ) }" }</p>
            <p class="tagline">
                { "Write " }<strong>{ "less" }</strong>
                { ". Code " }<strong>{ "smarter" }</strong>
                { ". Win " }<strong>{ "bigger" }</strong>{ "." }
            </p>
            <p class="sub">{ "The ultimate code minimization challenge where creativity meets efficiency" }</p>
            <a href="#register"><button class="cta">{ "Register Now →" }</button></a>
            <div class="stats">
                <div class="card">
                    <div class="stat-value">{ "March 26" }</div>
                    <div class="stat-label">{ "Event Date" }</div>
                </div>
                <div class="card">
                    <div class="stat-value">{ "5th & 3rd" }</div>
                    <div class="stat-label">{ "Semester Students" }</div>
                </div>
            </div>
        </section>
    }
}

fn about_section() -> Html {
    html! {
        <section id="about">
            <h2 class="heading">{ "What is OPTICODE?" }</h2>
            <p class="lede">{ "A revolutionary coding competition that challenges you to think differently" }</p>
            <div class="grid">
                <div class="card">
                    <h3>{ "Code Minimization Challenge" }</h3>
                    <p>
                        { "Solve algorithmic challenges using the absolute minimum lines of code. "}
                        { "Fewer lines = higher rank = better recognition." }
                    </p>
                    <ul>
                        <li>{ "Multiple programming languages supported" }</li>
                        <li>{ "Real-time leaderboard rankings" }</li>
                        <li>{ "Community recognition & networking" }</li>
                    </ul>
                </div>
                { for HIGHLIGHTS.iter().map(|h| html! {
                    <div class="card">
                        <h4>{ h.title }</h4>
                        <p>{ h.blurb }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn how_it_works_section() -> Html {
    html! {
        <section id="how-it-works">
            <h2 class="heading">{ "How It Works" }</h2>
            <p class="lede">{ "Three simple steps to start your journey" }</p>
            <div class="grid">
                { for STEPS.iter().map(|s| html! {
                    <div class="card">
                        <div class="step-num">{ s.num }</div>
                        <h4>{ s.title }</h4>
                        <p>{ s.blurb }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn challenge_preview_section() -> Html {
    html! {
        <section id="preview">
            <h2 class="heading">{ "Challenge Preview" }</h2>
            <p class="lede">{ "See the power of code optimization in action" }</p>
            <div class="grid">
                <div class="card">
                    <div class="code-head">
                        <span>{ "❌ Non-Optimized" }</span>
                        <span>{ "10 lines" }</span>
                    </div>
                    <pre class="code">{ VERBOSE_SAMPLE }</pre>
                </div>
                <div class="card">
                    <div class="code-head">
                        <span>{ "✓ Optimized" }</span>
                        <span>{ "4 lines" }</span>
                    </div>
                    <pre class="code">{ MINIMIZED_SAMPLE }</pre>
                </div>
            </div>
            <div class="grid" style="margin-top: 20px;">
                { for COMPARISON_STATS.iter().map(|(value, label)| html! {
                    <div class="card">
                        <div class="stat-value">{ *value }</div>
                        <div class="stat-label">{ *label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn coordinators_section() -> Html {
    html! {
        <section id="team">
            <h2 class="heading">{ "Meet the Team" }</h2>
            <p class="lede">
                { "The passionate faculty and student coordinators powering OPTICODE — scroll on to connect with the people behind the experience." }
            </p>
            <h3 style="text-align: center;">{ "Faculty Coordinators" }</h3>
            <div class="grid">
                { for FACULTY_COORDINATORS.iter().map(|f| html! {
                    <div class="card person">
                        <img src={f.image} alt={f.name} />
                        <h4>{ f.name }</h4>
                        <div class="role">{ f.role }</div>
                        <div class="dept">{ f.dept }</div>
                    </div>
                }) }
            </div>
            <h3 style="text-align: center; margin-top: 40px;">{ "Student Coordinators" }</h3>
            <div class="grid">
                { for STUDENT_COORDINATORS.iter().map(|name| html! {
                    <div class="card person">
                        <h4>{ *name }</h4>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn footer_section() -> Html {
    html! {
        <footer>
            <div class="foot-grid">
                <div>
                    <h4>{ "OPTICODE" }</h4>
                    <p>{ "The ultimate code minimization challenge for elite programmers." }</p>
                </div>
                <div>
                    <h4>{ "Quick Links" }</h4>
                    <ul>
                        <li><a href="#register">{ "Register" }</a></li>
                        <li><a href="#about">{ "About" }</a></li>
                        <li><a href="#faq">{ "Rules" }</a></li>
                        <li><a href="#team">{ "Contact" }</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{ "Contact" }</h4>
                    <ul>
                        <li><a href="mailto:principal@bietdvg.edu">{ "principal@bietdvg.edu" }</a></li>
                        <li>
                            <a href="https://www.bietdvg.edu/" target="_blank" rel="noreferrer">
                                { "BIET Official Website" }
                            </a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{ "Follow Us" }</h4>
                    <ul>
                        <li>
                            <a href="https://www.linkedin.com/school/bapuji-institute-of-engineering-&-technology-davanagere/"
                                target="_blank" rel="noreferrer">{ "LinkedIn" }</a>
                        </li>
                        <li>
                            <a href="https://www.instagram.com/biet__cse" target="_blank" rel="noreferrer">
                                { "Instagram" }
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
            <p class="copyright">{ "© 2025 OPTICODE. All rights reserved." }</p>
        </footer>
    }
}

// ---------- app ----------

fn text_edit(
    form: &UseStateHandle<RegistrationForm>,
    apply: fn(&mut RegistrationForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

fn select_edit(
    form: &UseStateHandle<RegistrationForm>,
    apply: fn(&mut RegistrationForm, String),
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else {
            return;
        };
        let mut next = (*form).clone();
        apply(&mut next, sel.value());
        form.set(next);
    })
}

#[function_component(App)]
fn app() -> Html {
    // Registration workflow state
    let form = use_state(RegistrationForm::default);
    let in_flight = use_state(|| false);
    let status = use_state(|| None::<SubmissionStatus>);

    // Presentation shell toggles
    let open_faq = use_state(|| None::<usize>);
    let nav_open = use_state(|| false);

    let config = use_memo((), |_| SupabaseConfig::from_build_env());

    // Field handlers. usn/section are upper-cased here and again when the row
    // is built, so the stored value can never be lowercase.
    let on_name = text_edit(&form, |f, v| f.name = v);
    let on_email = text_edit(&form, |f, v| f.email = v);
    let on_usn = text_edit(&form, |f, v| f.usn = v.to_uppercase());
    let on_hackerrank = text_edit(&form, |f, v| f.hackerrank = v);
    let on_section = text_edit(&form, |f, v| f.section = v.to_uppercase());
    let on_department = select_edit(&form, |f, v| f.department = v);
    let on_semester = select_edit(&form, |f, v| f.semester = v);

    let on_agreed = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.agreed = input.checked();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        let status = status.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(row) = begin_submission(*in_flight, &form) else {
                return;
            };

            status.set(None);
            in_flight.set(true);

            let form = form.clone();
            let in_flight = in_flight.clone();
            let status = status.clone();
            let config = config.clone();
            spawn_local(async move {
                let result = insert_registration(&config, &row).await;
                let (reset, outcome) = settle_submission(&result);
                if let Some(blank) = reset {
                    form.set(blank);
                }
                status.set(Some(outcome));
                in_flight.set(false);
            });
        })
    };

    let on_toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: MouseEvent| nav_open.set(!*nav_open))
    };

    let status_line = if let Some(st) = (*status).clone() {
        let class = if st.is_success() { "status ok" } else { "status err" };
        html! { <p class={class}>{ st.message }</p> }
    } else {
        html! {}
    };

    html! {
        <>
            <nav class="nav">
                <div class="brand">{ "OPTICODE" }</div>
                <div class="navlinks">
                    <a href="#register">{ "Register" }</a>
                    <a href="#about">{ "About" }</a>
                    <a href="#register"><button class="cta">{ "Join Now" }</button></a>
                </div>
                <button class="menu-toggle" onclick={on_toggle_nav}>{ "☰" }</button>
            </nav>
            if *nav_open {
                <div class="mobile-nav">
                    <a href="#register">{ "Register" }</a>
                    <a href="#about">{ "About" }</a>
                </div>
            }

            { hero_section() }
            { about_section() }
            { how_it_works_section() }
            { challenge_preview_section() }

            <section id="register">
                <h2 class="heading">{ "Register Now" }</h2>
                <p class="lede">{ "Limited spots available — secure your place today!" }</p>
                <form class="register" onsubmit={on_submit}>
                    <div class="row2">
                        <div class="field">
                            <label for="name">{ "Full Name" }</label>
                            <input
                                id="name"
                                type="text"
                                required={true}
                                placeholder="John Doe"
                                value={form.name.clone()}
                                oninput={on_name}
                            />
                        </div>
                        <div class="field">
                            <label for="email">{ "Email" }</label>
                            <input
                                id="email"
                                type="email"
                                required={true}
                                placeholder="john@example.com"
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                        </div>
                    </div>
                    <div class="row2">
                        <div class="field">
                            <label for="department">{ "Department" }</label>
                            <select
                                id="department"
                                required={true}
                                value={form.department.clone()}
                                onchange={on_department}
                            >
                                <option value="">{ "Select Department" }</option>
                                { for DEPARTMENTS.iter().map(|(code, label)| html! {
                                    <option value={*code} selected={form.department == *code}>{ *label }</option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="usn">{ "USN" }</label>
                            <input
                                id="usn"
                                type="text"
                                required={true}
                                placeholder="1XX21CS001"
                                value={form.usn.clone()}
                                oninput={on_usn}
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label for="hackerrank">{ "HackerRank Username" }</label>
                        <input
                            id="hackerrank"
                            type="text"
                            required={true}
                            placeholder="your_hackerrank_username"
                            value={form.hackerrank.clone()}
                            oninput={on_hackerrank}
                        />
                    </div>
                    <div class="row2">
                        <div class="field">
                            <label for="semester">{ "Semester" }</label>
                            <select
                                id="semester"
                                required={true}
                                value={form.semester.clone()}
                                onchange={on_semester}
                            >
                                <option value="">{ "Select Semester" }</option>
                                { for (1..=8u8).map(|sem| html! {
                                    <option value={sem.to_string()} selected={form.semester == sem.to_string()}>
                                        { semester_label(sem) }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="section">{ "Section" }</label>
                            <input
                                id="section"
                                type="text"
                                required={true}
                                placeholder="A, B, C..."
                                maxlength="2"
                                value={form.section.clone()}
                                oninput={on_section}
                            />
                        </div>
                    </div>
                    <label class="consent">
                        <input
                            type="checkbox"
                            required={true}
                            checked={form.agreed}
                            onchange={on_agreed}
                        />
                        <span>
                            { "I agree to the terms and conditions, and consent to receive updates about OPTICODE" }
                        </span>
                    </label>
                    <button type="submit" class="cta" style="width: 100%;" disabled={*in_flight}>
                        { if *in_flight { "Submitting..." } else { "Secure Your Spot" } }
                    </button>
                    { status_line }
                </form>
            </section>

            { coordinators_section() }

            <section id="faq">
                <h2 class="heading">{ "Got Questions?" }</h2>
                <p class="lede">{ "Find answers to commonly asked questions" }</p>
                { for FAQ_ITEMS.iter().enumerate().map(|(idx, (q, a))| {
                    let is_open = *open_faq == Some(idx);
                    let onclick = {
                        let open_faq = open_faq.clone();
                        Callback::from(move |_: MouseEvent| {
                            open_faq.set(if *open_faq == Some(idx) { None } else { Some(idx) });
                        })
                    };
                    html! {
                        <button class="faq-item" {onclick}>
                            <div class="card">
                                <div class="faq-q">
                                    <span>{ *q }</span>
                                    <span class={if is_open { "chev open" } else { "chev" }}>{ "▾" }</span>
                                </div>
                                if is_open {
                                    <p class="faq-a">{ *a }</p>
                                }
                            </div>
                        </button>
                    }
                }) }
            </section>

            { footer_section() }
        </>
    }
}

fn main() {
    let config = SupabaseConfig::from_build_env();
    if !config.is_configured() {
        web_sys::console::warn_1(&JsValue::from_str(
            "Supabase credentials are not set. Define SUPABASE_URL and SUPABASE_ANON_KEY at build time; registration submits will fail until then.",
        ));
    }
    yew::Renderer::<App>::new().render();
}

// ---------- tests ----------

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> RegistrationForm {
        RegistrationForm {
            name: " Jane Doe ".to_string(),
            email: "jane@x.com".to_string(),
            department: "CSE".to_string(),
            usn: "1xx21cs001".to_string(),
            hackerrank: "jane_hr".to_string(),
            semester: "5".to_string(),
            section: " b".to_string(),
            agreed: true,
        }
    }

    #[test]
    fn row_trims_and_uppercases() {
        let row = jane().row();
        assert_eq!(
            row,
            RegistrationRow {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                department: "CSE".to_string(),
                usn: "1XX21CS001".to_string(),
                hackerrank: "jane_hr".to_string(),
                semester: "5".to_string(),
                section: "B".to_string(),
                agreed: true,
            }
        );
    }

    #[test]
    fn row_passes_selections_through_unchanged() {
        let mut form = jane();
        form.department = "AIML".to_string();
        form.semester = "3".to_string();
        form.agreed = false;
        let row = form.row();
        assert_eq!(row.department, "AIML");
        assert_eq!(row.semester, "3");
        assert!(!row.agreed);
    }

    #[test]
    fn row_serializes_as_one_insert_row() {
        let body = serde_json::to_value([jane().row()]).unwrap();
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);

        let mut got: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = vec![
            "name", "email", "department", "usn", "hackerrank", "semester", "section", "agreed",
        ];
        got.sort_unstable();
        expected.sort_unstable();
        assert_eq!(got, expected);
        assert_eq!(rows[0]["usn"], "1XX21CS001");
        assert_eq!(rows[0]["agreed"], true);
    }

    #[test]
    fn gate_blocks_while_in_flight() {
        assert_eq!(begin_submission(true, &jane()), None);
    }

    #[test]
    fn gate_yields_normalized_row_when_idle() {
        let row = begin_submission(false, &jane()).unwrap();
        assert_eq!(row.name, "Jane Doe");
        assert_eq!(row.section, "B");
    }

    #[test]
    fn success_resets_form_and_reports() {
        let (reset, status) = settle_submission(&Ok(()));
        assert_eq!(reset, Some(RegistrationForm::default()));
        assert!(status.is_success());
        assert_eq!(status.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_keeps_form_and_surfaces_backend_message() {
        let err = InsertError {
            message: Some("duplicate entry".to_string()),
        };
        let (reset, status) = settle_submission(&Err(err));
        assert_eq!(reset, None);
        assert!(!status.is_success());
        assert!(status.message.contains("duplicate entry"));
    }

    #[test]
    fn failure_without_detail_uses_fallback() {
        let (_, status) = settle_submission(&Err(InsertError { message: None }));
        assert_eq!(status.message, FALLBACK_ERROR);

        let blank = InsertError {
            message: Some(String::new()),
        };
        let (_, status) = settle_submission(&Err(blank));
        assert_eq!(status.message, FALLBACK_ERROR);
    }

    #[test]
    fn resubmission_accepted_after_any_outcome() {
        // After success the form is blank but the gate opens again.
        let (reset, _) = settle_submission(&Ok(()));
        assert!(begin_submission(false, &reset.unwrap()).is_some());

        // After failure the original fields are still there for a retry.
        let (reset, _) = settle_submission(&Err(InsertError { message: None }));
        assert!(reset.is_none());
        assert!(begin_submission(false, &jane()).is_some());
    }

    #[test]
    fn insert_url_tolerates_trailing_slash() {
        let cfg = SupabaseConfig {
            url: "https://demo.supabase.co/".to_string(),
            anon_key: "key".to_string(),
        };
        assert_eq!(
            cfg.insert_url(REGISTRATIONS_TABLE),
            "https://demo.supabase.co/rest/v1/registrations"
        );
    }

    #[test]
    fn config_requires_both_values() {
        let both = SupabaseConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "key".to_string(),
        };
        assert!(both.is_configured());

        let no_key = SupabaseConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: String::new(),
        };
        assert!(!no_key.is_configured());

        let no_url = SupabaseConfig {
            url: String::new(),
            anon_key: "key".to_string(),
        };
        assert!(!no_url.is_configured());
    }

    #[test]
    fn semester_labels_use_ordinals() {
        assert_eq!(semester_label(1), "1st Semester");
        assert_eq!(semester_label(2), "2nd Semester");
        assert_eq!(semester_label(3), "3rd Semester");
        assert_eq!(semester_label(4), "4th Semester");
        assert_eq!(semester_label(8), "8th Semester");
    }
}
