use super::{ConceptRecord, SkillCategory};
use crate::core::FactKind;

pub(super) static CONCEPTS: &[ConceptRecord] = &[
    ConceptRecord {
        key: "gui_programming",
        name: "GUI Programming",
        category: SkillCategory::Gui,
        definition: "Creating graphical user interfaces with windows, buttons and interactive elements.",
        usage_template: "Built a desktop interface with {name} in {file}, wiring widgets to user actions.",
        interview_question: "Describe your experience with GUI development.",
        interview_answer_template: "I've built desktop applications with {name}, organizing the interface into reusable widgets and keeping it responsive to user interaction. {file} is an example from my own work.",
        technical_details: "Widget hierarchies, layout managers, event handling and keeping long work off the UI thread.",
        keywords: &["gui", "desktop", "tkinter", "qt", "user interface", "ui"],
    },
    ConceptRecord {
        key: "network_integration",
        name: "Network Integration",
        category: SkillCategory::Networking,
        definition: "Connecting an application to external services and data sources over the network.",
        usage_template: "Talked to remote services through {name} in {file} (line {line}).",
        interview_question: "How do you handle API integration and network errors?",
        interview_answer_template: "I integrate external services with {name}, setting timeouts, checking status codes and surfacing failures to the user instead of crashing. You can see this in {file}.",
        technical_details: "HTTP verbs, headers and authentication, timeouts, retries and response parsing.",
        keywords: &["api", "apis", "rest", "http", "requests", "networking", "integration", "api integration"],
    },
    ConceptRecord {
        key: "web_scraping",
        name: "Web Scraping",
        category: SkillCategory::Networking,
        definition: "Automatically extracting structured data from web pages.",
        usage_template: "Extracted data from HTML with {name} in {file}.",
        interview_question: "Explain your approach to web scraping and data extraction.",
        interview_answer_template: "I parse HTML with {name}, using several selector strategies so the extraction survives differences between sites. {file} shows the approach.",
        technical_details: "CSS selectors, HTML parsing, fallback strategies and polite request pacing.",
        keywords: &["scraping", "web scraping", "beautifulsoup", "selenium", "crawling", "data extraction"],
    },
    ConceptRecord {
        key: "web_services",
        name: "Web Services",
        category: SkillCategory::Networking,
        definition: "Exposing functionality over HTTP so other programs can call it.",
        usage_template: "Served an HTTP interface with {name} in {file}.",
        interview_question: "Have you built your own APIs?",
        interview_answer_template: "Yes, I've exposed endpoints with {name}, designing request and response shapes and validating input at the boundary. {file} contains that service.",
        technical_details: "Routing, request validation, status codes and serialization of responses.",
        keywords: &["flask", "fastapi", "django", "backend", "api development", "microservices", "web services"],
    },
    ConceptRecord {
        key: "concurrent_programming",
        name: "Concurrent Programming",
        category: SkillCategory::Concurrency,
        definition: "Running multiple operations at the same time or in the background.",
        usage_template: "Used {name} in {file} to run work in the background.",
        interview_question: "How do you handle concurrent operations in your applications?",
        interview_answer_template: "I move slow work such as network calls onto background threads with {name}, so the rest of the program stays responsive. {file} is where I did that.",
        technical_details: "Threads and thread pools, daemon threads, sharing data safely and handing results back to the main thread.",
        keywords: &["concurrency", "threading", "multithreading", "parallel", "multiprocessing", "threads"],
    },
    ConceptRecord {
        key: "async_programming",
        name: "Asynchronous Programming",
        category: SkillCategory::Concurrency,
        definition: "Structuring I/O-bound work as coroutines driven by an event loop.",
        usage_template: "Wrote coroutine-based code in {file} ({name} at line {line}).",
        interview_question: "When would you choose async/await over threads?",
        interview_answer_template: "For many concurrent I/O operations I use coroutines; {file} shows {name} in use. Threads remain my choice for blocking libraries that don't support async.",
        technical_details: "Event loops, awaiting coroutines, gathering tasks and avoiding blocking calls inside async code.",
        keywords: &["async", "asyncio", "async await", "event loop", "coroutines"],
    },
    ConceptRecord {
        key: "data_serialization",
        name: "Data Serialization",
        category: SkillCategory::DataProcessing,
        definition: "Converting in-memory data to and from formats such as JSON or CSV.",
        usage_template: "Read and wrote structured data with {name} in {file}.",
        interview_question: "How do you store and exchange structured data?",
        interview_answer_template: "I use {name} to persist application data and to talk to APIs, validating what I load before trusting it. {file} is one example.",
        technical_details: "Parsing and emitting JSON/CSV, schema expectations and handling malformed input.",
        keywords: &["json", "csv", "yaml", "serialization", "data formats"],
    },
    ConceptRecord {
        key: "data_analysis",
        name: "Data Analysis",
        category: SkillCategory::DataProcessing,
        definition: "Transforming and summarizing datasets to answer questions.",
        usage_template: "Processed tabular or numeric data with {name} in {file}.",
        interview_question: "Walk me through a data analysis you've done.",
        interview_answer_template: "I load and reshape data with {name}, then aggregate it into the numbers the question needs. {file} contains that pipeline.",
        technical_details: "DataFrames, vectorized operations, grouping and aggregation, plotting results.",
        keywords: &["pandas", "numpy", "data analysis", "analytics", "etl", "matplotlib"],
    },
    ConceptRecord {
        key: "regular_expressions",
        name: "Regular Expressions",
        category: SkillCategory::DataProcessing,
        definition: "Describing text patterns to search, validate and extract from strings.",
        usage_template: "Matched and extracted text patterns with {name} in {file}.",
        interview_question: "How do you approach text processing problems?",
        interview_answer_template: "For structured text I reach for {name}, compiling patterns once and keeping them readable with named groups. {file} uses this.",
        technical_details: "Character classes, groups, greedy versus lazy quantifiers and precompiling patterns.",
        keywords: &["regex", "regular expressions", "text processing", "parsing"],
    },
    ConceptRecord {
        key: "time_handling",
        name: "Date and Time Handling",
        category: SkillCategory::DataProcessing,
        definition: "Working with timestamps, durations and calendars correctly.",
        usage_template: "Handled dates and times with {name} in {file}.",
        interview_question: "What pitfalls do you watch for when handling dates and times?",
        interview_answer_template: "I use {name} for timestamps and durations and keep timezones explicit. {file} shows how I format and compare dates.",
        technical_details: "Naive versus aware datetimes, formatting, parsing and time arithmetic.",
        keywords: &["datetime", "time zones", "scheduling"],
    },
    ConceptRecord {
        key: "file_system_operations",
        name: "File System Operations",
        category: SkillCategory::DataProcessing,
        definition: "Reading, writing and organizing files and directories from code.",
        usage_template: "Managed files and paths with {name} in {file}.",
        interview_question: "How do you write file-handling code that works across platforms?",
        interview_answer_template: "I build paths with {name} instead of string concatenation and always close files deterministically. {file} is an example.",
        technical_details: "Path manipulation, directory traversal, encodings and cross-platform differences.",
        keywords: &["file system", "files", "automation", "scripting", "pathlib"],
    },
    ConceptRecord {
        key: "database_integration",
        name: "Database Integration",
        category: SkillCategory::DataProcessing,
        definition: "Persisting and querying application data in a database.",
        usage_template: "Stored and queried data with {name} in {file}.",
        interview_question: "How do you work with databases from application code?",
        interview_answer_template: "I use {name} with parameterized queries and keep schema changes explicit. {file} contains my data access layer.",
        technical_details: "Connections and transactions, parameterized SQL, ORMs and migrations.",
        keywords: &["sql", "database", "databases", "postgresql", "mysql", "sqlite", "orm", "sqlalchemy"],
    },
    ConceptRecord {
        key: "machine_learning",
        name: "Machine Learning",
        category: SkillCategory::DataProcessing,
        definition: "Building models that learn patterns from data to make predictions.",
        usage_template: "Applied machine learning tooling ({name}) in {file}.",
        interview_question: "Tell me about a machine learning component you've built.",
        interview_answer_template: "I've used {name} to add learned behavior to a project, keeping the model behind a small interface so it can be evaluated and swapped. {file} has the integration.",
        technical_details: "Train/test splits, feature preparation, evaluation metrics and model inference.",
        keywords: &["machine learning", "ml", "ai", "scikit learn", "pytorch", "tensorflow", "llm", "openai"],
    },
    ConceptRecord {
        key: "system_integration",
        name: "System Integration",
        category: SkillCategory::Architecture,
        definition: "Coordinating with the operating system, external processes and the command line.",
        usage_template: "Integrated with the host system through {name} in {file}.",
        interview_question: "How do you automate work that involves other programs?",
        interview_answer_template: "I drive external tools with {name}, checking exit codes and capturing output rather than assuming success. {file} shows this.",
        technical_details: "Process spawning, exit codes, environment variables and command-line arguments.",
        keywords: &["automation", "scripting", "linux", "command line", "cli", "devops"],
    },
    ConceptRecord {
        key: "code_analysis",
        name: "Code Analysis",
        category: SkillCategory::Architecture,
        definition: "Programs that read and reason about other programs' source code.",
        usage_template: "Inspected source code structurally with {name} in {file}.",
        interview_question: "Have you written tools that analyze code?",
        interview_answer_template: "Yes, I've used {name} to walk syntax trees and pull out structure such as imports and definitions. {file} is that tool.",
        technical_details: "Syntax trees, node visitors and the difference between syntax and semantics.",
        keywords: &["static analysis", "metaprogramming", "compilers", "tooling"],
    },
    ConceptRecord {
        key: "object_oriented_programming",
        name: "Object-Oriented Programming",
        category: SkillCategory::Architecture,
        definition: "Organizing code into classes that bundle state with the behavior acting on it.",
        usage_template: "Structured {file} around classes such as {name}.",
        interview_question: "How do you decide what becomes a class?",
        interview_answer_template: "I group related state and behavior into classes like {name} in {file}, giving each class one responsibility so it stays easy to change.",
        technical_details: "Encapsulation, composition over inheritance, methods and properties.",
        keywords: &["oop", "object oriented", "object oriented programming", "classes", "design patterns"],
    },
    ConceptRecord {
        key: "error_handling",
        name: "Error Handling",
        category: SkillCategory::Architecture,
        definition: "Anticipating failures and recovering from them gracefully.",
        usage_template: "Guarded risky operations with {name} blocks in {file} ({scope}).",
        interview_question: "How do you make your programs robust to failures?",
        interview_answer_template: "I catch specific exceptions where I can recover, report the rest clearly, and never let one bad input take down the whole run. {file} shows this in {scope}.",
        technical_details: "Specific exception types, cleanup with finally, re-raising and user-facing error messages.",
        keywords: &["error handling", "exceptions", "debugging", "reliability"],
    },
    ConceptRecord {
        key: "resource_management",
        name: "Resource Management",
        category: SkillCategory::Architecture,
        definition: "Acquiring and releasing files, locks and connections deterministically.",
        usage_template: "Used context managers ({name} statements) in {file} to release resources reliably.",
        interview_question: "How do you make sure resources get cleaned up?",
        interview_answer_template: "I wrap files, locks and connections in context managers so they're released even when errors occur, as in {file}.",
        technical_details: "The with statement, __enter__/__exit__ and contextlib helpers.",
        keywords: &["context managers", "resource management"],
    },
    ConceptRecord {
        key: "functional_idioms",
        name: "Functional Idioms",
        category: SkillCategory::DataProcessing,
        definition: "Expressing data transformations declaratively with comprehensions and small functions.",
        usage_template: "Transformed collections with {name} expressions in {file}.",
        interview_question: "How do you keep data transformation code concise and readable?",
        interview_answer_template: "I use comprehensions and small lambdas for simple transformations and switch to named functions once logic grows, as you can see in {file}.",
        technical_details: "List/dict/set comprehensions, generator expressions, lambdas and higher-order functions.",
        keywords: &["functional programming", "comprehensions"],
    },
    ConceptRecord {
        key: "generators",
        name: "Generators and Lazy Iteration",
        category: SkillCategory::DataProcessing,
        definition: "Producing values on demand instead of building whole collections in memory.",
        usage_template: "Produced values lazily with yield in {file} ({scope}).",
        interview_question: "When would you write a generator?",
        interview_answer_template: "When data is large or unbounded I write generators so consumers pull items one at a time; {scope} in {file} works that way.",
        technical_details: "yield, iterator protocol, generator pipelines and memory usage.",
        keywords: &["generators", "iterators", "streaming"],
    },
    ConceptRecord {
        key: "data_modeling",
        name: "Data Modeling",
        category: SkillCategory::Architecture,
        definition: "Describing the shape of application data with explicit typed records.",
        usage_template: "Modeled application data with {name} in {file}.",
        interview_question: "How do you model the data your application works with?",
        interview_answer_template: "I define explicit record types with {name}, so the shape of the data is documented and checked in one place. {file} has examples.",
        technical_details: "Dataclasses, type hints, immutability and validation at boundaries.",
        keywords: &["data modeling", "dataclasses", "pydantic", "type hints"],
    },
    ConceptRecord {
        key: "abstraction",
        name: "Interfaces and Abstraction",
        category: SkillCategory::Architecture,
        definition: "Defining contracts that several implementations can satisfy.",
        usage_template: "Declared abstract contracts with {name} in {file}.",
        interview_question: "How do you design code that's easy to extend?",
        interview_answer_template: "I define abstract base classes with {name} so new implementations plug in without touching callers. {file} shows the pattern.",
        technical_details: "Abstract base classes, abstract methods, duck typing and protocols.",
        keywords: &["software design", "architecture", "interfaces", "solid", "design patterns"],
    },
    ConceptRecord {
        key: "caching",
        name: "Caching and Memoization",
        category: SkillCategory::Architecture,
        definition: "Reusing previously computed results to avoid repeating expensive work.",
        usage_template: "Memoized results with {name} in {file}.",
        interview_question: "How have you improved the performance of slow code?",
        interview_answer_template: "One technique I use is memoization with {name}, which avoided repeated work in {file}. I measure before and after to confirm it helps.",
        technical_details: "LRU caches, cache invalidation and trade-offs between memory and time.",
        keywords: &["caching", "performance", "optimization"],
    },
    ConceptRecord {
        key: "logging",
        name: "Logging",
        category: SkillCategory::Architecture,
        definition: "Recording what a program does so problems can be diagnosed later.",
        usage_template: "Instrumented {file} with {name} for diagnostics.",
        interview_question: "How do you debug problems in programs that are already running?",
        interview_answer_template: "I instrument code with {name} at sensible levels so I can reconstruct what happened afterwards. {file} is set up this way.",
        technical_details: "Log levels, handlers and formatters, structured context in messages.",
        keywords: &["logging", "monitoring", "observability", "debugging"],
    },
    ConceptRecord {
        key: "automated_testing",
        name: "Automated Testing",
        category: SkillCategory::Architecture,
        definition: "Verifying behavior automatically with repeatable tests.",
        usage_template: "Wrote automated checks with {name} in {file}.",
        interview_question: "How do you test your code?",
        interview_answer_template: "I write automated tests with {name} that pin down expected behavior and run on every change. {file} contains some of them.",
        technical_details: "Unit versus integration tests, fixtures, parametrization and mocking.",
        keywords: &["testing", "unit testing", "unit tests", "pytest", "tdd", "qa"],
    },
    ConceptRecord {
        key: "code_documentation",
        name: "Code Documentation",
        category: SkillCategory::Architecture,
        definition: "Explaining what code does and why, right next to the code.",
        usage_template: "Documented {scope} in {file}: \"{name}\".",
        interview_question: "How do you make your code understandable to others?",
        interview_answer_template: "I write docstrings that explain intent, for example \"{name}\" in {file}, and keep them current as the code changes.",
        technical_details: "Docstrings, module-level documentation and self-explanatory naming.",
        keywords: &["documentation", "technical writing", "communication"],
    },
];

/// Fact signatures mapped to concept keys, grouped by fact kind.
pub(super) static SIGNATURES: &[(FactKind, &[&str], &str)] = &[
    // Imports, keyed by top-level module
    (
        FactKind::Import,
        &["tkinter", "customtkinter", "PyQt5", "PyQt6", "PySide2", "PySide6", "wx", "kivy"],
        "gui_programming",
    ),
    (
        FactKind::Import,
        &["requests", "urllib", "urllib3", "http", "httpx", "aiohttp", "socket", "websocket", "websockets", "paramiko"],
        "network_integration",
    ),
    (
        FactKind::Import,
        &["bs4", "lxml", "scrapy", "selenium", "playwright"],
        "web_scraping",
    ),
    (
        FactKind::Import,
        &["flask", "fastapi", "django", "starlette", "bottle", "tornado"],
        "web_services",
    ),
    (
        FactKind::Import,
        &["threading", "multiprocessing", "concurrent", "queue"],
        "concurrent_programming",
    ),
    (FactKind::Import, &["asyncio", "trio", "anyio"], "async_programming"),
    (
        FactKind::Import,
        &["json", "csv", "pickle", "yaml", "toml", "tomllib", "xml", "msgpack"],
        "data_serialization",
    ),
    (
        FactKind::Import,
        &["pandas", "numpy", "scipy", "matplotlib", "seaborn", "polars"],
        "data_analysis",
    ),
    (FactKind::Import, &["re", "regex"], "regular_expressions"),
    (
        FactKind::Import,
        &["datetime", "time", "calendar", "zoneinfo", "dateutil", "pytz"],
        "time_handling",
    ),
    (
        FactKind::Import,
        &["os", "pathlib", "shutil", "glob", "tempfile", "io"],
        "file_system_operations",
    ),
    (
        FactKind::Import,
        &["sqlite3", "sqlalchemy", "psycopg2", "pymongo", "redis", "peewee"],
        "database_integration",
    ),
    (
        FactKind::Import,
        &["sklearn", "torch", "tensorflow", "keras", "transformers", "openai"],
        "machine_learning",
    ),
    (
        FactKind::Import,
        &["subprocess", "sys", "argparse", "signal", "platform"],
        "system_integration",
    ),
    (FactKind::Import, &["ast", "inspect", "tokenize", "dis"], "code_analysis"),
    (
        FactKind::Import,
        &["dataclasses", "pydantic", "attr", "attrs", "enum"],
        "data_modeling",
    ),
    (FactKind::Import, &["abc"], "abstraction"),
    (FactKind::Import, &["logging", "loguru"], "logging"),
    (
        FactKind::Import,
        &["unittest", "pytest", "doctest", "hypothesis"],
        "automated_testing",
    ),
    // Calls, keyed by alias-resolved dotted name
    (
        FactKind::Call,
        &[
            "requests.get",
            "requests.post",
            "requests.put",
            "requests.patch",
            "requests.delete",
            "requests.head",
            "requests.request",
            "requests.Session",
            "urllib.request.urlopen",
            "urllib.request.Request",
            "http.client.HTTPConnection",
            "http.client.HTTPSConnection",
            "socket.socket",
            "socket.create_connection",
            "httpx.get",
            "httpx.post",
            "httpx.Client",
            "httpx.AsyncClient",
            "aiohttp.ClientSession",
        ],
        "network_integration",
    ),
    (
        FactKind::Call,
        &[
            "threading.Thread",
            "threading.Timer",
            "threading.Lock",
            "concurrent.futures.ThreadPoolExecutor",
            "concurrent.futures.ProcessPoolExecutor",
            "multiprocessing.Process",
            "multiprocessing.Pool",
            "queue.Queue",
        ],
        "concurrent_programming",
    ),
    (
        FactKind::Call,
        &["asyncio.run", "asyncio.gather", "asyncio.create_task", "asyncio.get_event_loop"],
        "async_programming",
    ),
    (
        FactKind::Call,
        &[
            "json.load",
            "json.loads",
            "json.dump",
            "json.dumps",
            "csv.reader",
            "csv.writer",
            "csv.DictReader",
            "csv.DictWriter",
            "pickle.load",
            "pickle.dump",
        ],
        "data_serialization",
    ),
    (FactKind::Call, &["bs4.BeautifulSoup"], "web_scraping"),
    (
        FactKind::Call,
        &["re.compile", "re.search", "re.match", "re.findall", "re.finditer", "re.sub"],
        "regular_expressions",
    ),
    (FactKind::Call, &["open"], "file_system_operations"),
    (
        FactKind::Call,
        &["subprocess.run", "subprocess.Popen", "subprocess.check_output", "subprocess.call"],
        "system_integration",
    ),
    // Decorators
    (FactKind::Decorator, &["dataclasses.dataclass"], "data_modeling"),
    (FactKind::Decorator, &["abc.abstractmethod"], "abstraction"),
    (
        FactKind::Decorator,
        &["functools.lru_cache", "functools.cache", "functools.cached_property"],
        "caching",
    ),
    (
        FactKind::Decorator,
        &["property", "staticmethod", "classmethod"],
        "object_oriented_programming",
    ),
    (
        FactKind::Decorator,
        &["pytest.fixture", "pytest.mark.parametrize"],
        "automated_testing",
    ),
    // Control constructs
    (FactKind::ControlConstruct, &["try", "raise"], "error_handling"),
    (FactKind::ControlConstruct, &["with"], "resource_management"),
    (FactKind::ControlConstruct, &["lambda", "comprehension"], "functional_idioms"),
    (FactKind::ControlConstruct, &["yield"], "generators"),
    (FactKind::ControlConstruct, &["await"], "async_programming"),
    // Kind-level and coroutine signatures
    (FactKind::FunctionDef, &["async"], "async_programming"),
    (FactKind::ClassDef, &["*"], "object_oriented_programming"),
    (FactKind::StringLiteral, &["*"], "code_documentation"),
];
