use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::profile_photo::ports::{
    incoming::{ProfilePhotoError, ProfilePhotoInfo, ProfilePhotoUseCase},
    outgoing::{
        ProfilePhotoData, ProfilePhotoFile, ProfilePhotoRecord, ProfilePhotoRepository,
        ProfilePhotoRepositoryError,
    },
};
use crate::profile_photo::upload_policy;
use crate::shared::files::{format_file_size, stored_file_name};

const STORED_NAME_PREFIX: &str = "profile_";

#[derive(Debug, Clone)]
pub struct ProfilePhotoService<R>
where
    R: ProfilePhotoRepository + Send + Sync,
{
    repository: R,
}

impl<R> ProfilePhotoService<R>
where
    R: ProfilePhotoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: ProfilePhotoRepositoryError, id: Option<Uuid>) -> ProfilePhotoError {
    match err {
        ProfilePhotoRepositoryError::NotFound => {
            ProfilePhotoError::NotFound(id.unwrap_or_default())
        }
        ProfilePhotoRepositoryError::Database(msg) => ProfilePhotoError::Repository(msg),
    }
}

#[async_trait]
impl<R> ProfilePhotoUseCase for ProfilePhotoService<R>
where
    R: ProfilePhotoRepository + Send + Sync,
{
    async fn upload_photo(
        &self,
        original_file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<ProfilePhotoRecord, ProfilePhotoError> {
        let accepted = upload_policy::validate(&original_file_name, &content_type, &bytes)
            .map_err(|rejection| {
                warn!(
                    "Rejected profile photo upload '{}': {}",
                    original_file_name, rejection
                );
                rejection
            })?;

        let data = ProfilePhotoData {
            file_name: stored_file_name(STORED_NAME_PREFIX, &original_file_name),
            original_file_name,
            file_format: accepted.file_format,
            file_size: bytes.len() as i64,
            content_type,
            image_width: accepted.width as i32,
            image_height: accepted.height as i32,
            image_data: bytes,
            uploaded_date: Utc::now(),
        };

        info!(
            "Storing new active profile photo: {} ({}x{})",
            data.file_name, data.image_width, data.image_height
        );

        self.repository
            .insert_active(data)
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn get_all_photos(&self) -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoError> {
        self.repository
            .find_all_meta()
            .await
            .map_err(|e| map_repo_error(e, None))
    }

    async fn activate_photo(&self, id: Uuid) -> Result<ProfilePhotoRecord, ProfilePhotoError> {
        info!("Activating profile photo with id: {}", id);

        self.repository
            .activate(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn delete_photo(&self, id: Uuid) -> Result<(), ProfilePhotoError> {
        info!("Deleting profile photo with id: {}", id);

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))
    }

    async fn view_photo(&self, id: Uuid) -> Result<ProfilePhotoFile, ProfilePhotoError> {
        self.repository
            .find_file(id)
            .await
            .map_err(|e| map_repo_error(e, Some(id)))?
            .ok_or(ProfilePhotoError::NotFound(id))
    }

    async fn view_active_photo(&self) -> Result<ProfilePhotoFile, ProfilePhotoError> {
        self.repository
            .find_active_file()
            .await
            .map_err(|e| map_repo_error(e, None))?
            .ok_or(ProfilePhotoError::NoActivePhoto)
    }

    async fn photo_info(&self) -> Result<ProfilePhotoInfo, ProfilePhotoError> {
        let active = self
            .repository
            .find_active_meta()
            .await
            .map_err(|e| map_repo_error(e, None))?;

        Ok(match active {
            Some(meta) => ProfilePhotoInfo {
                available: true,
                image_url: Some(format!("/api/profile-photo/view/{}", meta.id)),
                file_name: Some(meta.original_file_name),
                file_size: Some(format_file_size(meta.file_size)),
                image_width: Some(meta.image_width),
                image_height: Some(meta.image_height),
                uploaded_date: Some(meta.uploaded_date),
            },
            None => ProfilePhotoInfo {
                available: false,
                image_url: None,
                file_name: None,
                file_size: None,
                image_width: None,
                image_height: None,
                uploaded_date: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPhotoRepository {
        records: Mutex<Vec<(ProfilePhotoRecord, Vec<u8>)>>,
    }

    #[async_trait]
    impl ProfilePhotoRepository for MockPhotoRepository {
        async fn insert_active(
            &self,
            data: ProfilePhotoData,
        ) -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError> {
            let mut records = self.records.lock().unwrap();
            for (record, _) in records.iter_mut() {
                record.is_active = false;
            }
            let record = ProfilePhotoRecord {
                id: Uuid::new_v4(),
                file_name: data.file_name,
                original_file_name: data.original_file_name,
                file_format: data.file_format,
                file_size: data.file_size,
                content_type: data.content_type,
                image_width: data.image_width,
                image_height: data.image_height,
                uploaded_date: data.uploaded_date,
                is_active: true,
            };
            records.push((record.clone(), data.image_data));
            Ok(record)
        }

        async fn activate(
            &self,
            id: Uuid,
        ) -> Result<ProfilePhotoRecord, ProfilePhotoRepositoryError> {
            let mut records = self.records.lock().unwrap();
            if !records.iter().any(|(r, _)| r.id == id) {
                return Err(ProfilePhotoRepositoryError::NotFound);
            }
            for (record, _) in records.iter_mut() {
                record.is_active = record.id == id;
            }
            Ok(records
                .iter()
                .find(|(r, _)| r.id == id)
                .map(|(r, _)| r.clone())
                .unwrap())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ProfilePhotoRepositoryError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|(r, _)| r.id != id);
            if records.len() == before {
                return Err(ProfilePhotoRepositoryError::NotFound);
            }
            Ok(())
        }

        async fn find_all_meta(
            &self,
        ) -> Result<Vec<ProfilePhotoRecord>, ProfilePhotoRepositoryError> {
            let mut metas: Vec<ProfilePhotoRecord> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .map(|(r, _)| r.clone())
                .collect();
            metas.sort_by(|a, b| b.uploaded_date.cmp(&a.uploaded_date));
            Ok(metas)
        }

        async fn find_active_meta(
            &self,
        ) -> Result<Option<ProfilePhotoRecord>, ProfilePhotoRepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|(r, _)| r.is_active)
                .map(|(r, _)| r.clone()))
        }

        async fn find_active_file(
            &self,
        ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|(r, _)| r.is_active)
                .map(|(r, bytes)| ProfilePhotoFile {
                    file_name: r.file_name.clone(),
                    content_type: r.content_type.clone(),
                    image_data: bytes.clone(),
                }))
        }

        async fn find_file(
            &self,
            id: Uuid,
        ) -> Result<Option<ProfilePhotoFile>, ProfilePhotoRepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|(r, _)| r.id == id)
                .map(|(r, bytes)| ProfilePhotoFile {
                    file_name: r.file_name.clone(),
                    content_type: r.content_type.clone(),
                    image_data: bytes.clone(),
                }))
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[tokio::test]
    async fn upload_records_decoded_dimensions() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        let record = service
            .upload_photo("me.png".into(), "image/png".into(), png_bytes(640, 480))
            .await
            .expect("upload failed");

        assert!(record.is_active);
        assert_eq!(record.image_width, 640);
        assert_eq!(record.image_height, 480);
        assert!(record.file_name.starts_with("profile_"));
        assert!(record.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn second_upload_replaces_the_active_photo() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        service
            .upload_photo("a.png".into(), "image/png".into(), png_bytes(200, 200))
            .await
            .unwrap();
        let second = service
            .upload_photo("b.png".into(), "image/png".into(), png_bytes(200, 200))
            .await
            .unwrap();

        let all = service.get_all_photos().await.unwrap();
        let active: Vec<_> = all.iter().filter(|r| r.is_active).collect();

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);
    }

    #[tokio::test]
    async fn undecodable_upload_is_rejected() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        let result = service
            .upload_photo("me.png".into(), "image/png".into(), vec![0x42u8; 512])
            .await;

        assert!(matches!(result, Err(ProfilePhotoError::Rejected(_))));
        assert!(service.get_all_photos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn photo_info_includes_view_url_and_dimensions() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        let record = service
            .upload_photo("me.png".into(), "image/png".into(), png_bytes(300, 400))
            .await
            .unwrap();

        let info = service.photo_info().await.expect("info failed");

        assert!(info.available);
        assert_eq!(
            info.image_url.as_deref(),
            Some(format!("/api/profile-photo/view/{}", record.id).as_str())
        );
        assert_eq!(info.image_width, Some(300));
        assert_eq!(info.image_height, Some(400));
    }

    #[tokio::test]
    async fn photo_info_reports_unavailable_when_empty() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        let info = service.photo_info().await.expect("info failed");

        assert!(!info.available);
        assert!(info.image_url.is_none());
    }

    #[tokio::test]
    async fn view_active_without_photo_is_an_error() {
        let service = ProfilePhotoService::new(MockPhotoRepository::default());

        let result = service.view_active_photo().await;

        assert!(matches!(result, Err(ProfilePhotoError::NoActivePhoto)));
    }
}
