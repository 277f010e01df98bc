use super::const_error;

const_error!(
    INTERNAL,
    Internal,
    INTERNAL_SERVER_ERROR,
    "INTERNAL_ERROR",
    "internal server error"
);

// Transport
const_error!(
    JSON_MISSING_FIELDS,
    InvalidInput,
    BAD_REQUEST,
    "BAD_REQUEST",
    "missing or invalid fields"
);
const_error!(
    JSON_SYNTAX_ERROR,
    InvalidInput,
    BAD_REQUEST,
    "BAD_REQUEST",
    "syntax error"
);
const_error!(
    JSON_CONTENT_TYPE,
    InvalidInput,
    BAD_REQUEST,
    "BAD_REQUEST",
    "missing or wrong content-type"
);
const_error!(
    JSON_VALIDATE_INVALID,
    InvalidInput,
    BAD_REQUEST,
    "BAD_REQUEST",
    "invalid data"
);
const_error!(
    QUERY_INVALID,
    InvalidInput,
    BAD_REQUEST,
    "BAD_REQUEST",
    "missing or invalid query parameters"
);

// Not found
const_error!(
    TEAM_NOT_FOUND,
    NotFound,
    NOT_FOUND,
    "NOT_FOUND",
    "team not found"
);
const_error!(
    USER_NOT_FOUND,
    NotFound,
    NOT_FOUND,
    "NOT_FOUND",
    "user not found"
);
const_error!(
    AUTHOR_NOT_FOUND,
    NotFound,
    NOT_FOUND,
    "NOT_FOUND",
    "author not found"
);
const_error!(PR_NOT_FOUND, NotFound, NOT_FOUND, "NOT_FOUND", "PR not found");

// Conflicts
const_error!(
    TEAM_EXISTS,
    Conflict,
    BAD_REQUEST,
    "TEAM_EXISTS",
    "team_name already exists"
);
const_error!(
    PR_EXISTS,
    Conflict,
    CONFLICT,
    "PR_EXISTS",
    "PR id already exists"
);
const_error!(
    PR_MERGED,
    Conflict,
    CONFLICT,
    "PR_MERGED",
    "cannot reassign on merged PR"
);
const_error!(
    NOT_ASSIGNED,
    Conflict,
    CONFLICT,
    "NOT_ASSIGNED",
    "reviewer is not assigned to this PR"
);
const_error!(
    NO_CANDIDATE,
    Conflict,
    CONFLICT,
    "NO_CANDIDATE",
    "no active replacement candidate in team"
);
