use std::collections::BTreeSet;

/// The canonical index space for one ranking pass: every distinct skill token seen
/// across the user and the candidate jobs, in lexicographic order.
///
/// Tokens must already be normalized. Vectors built from different vocabularies
/// are not comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Builds the vocabulary from the user's tokens and each job's tokens.
    /// Empty tokens are ignored.
    pub fn build<'a, U, J, T>(user_tokens: U, job_tokens: J) -> Self
    where
        U: IntoIterator<Item = &'a String>,
        J: IntoIterator<Item = T>,
        T: IntoIterator<Item = &'a String>,
    {
        let mut set: BTreeSet<&str> = BTreeSet::new();
        set.extend(user_tokens.into_iter().map(String::as_str));
        for job in job_tokens {
            set.extend(job.into_iter().map(String::as_str));
        }
        set.remove("");

        Self {
            tokens: set.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
